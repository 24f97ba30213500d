
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::data_types::caller_label::CallerLabel;
use crate::data_types::classification::ClassificationResult;

/// Contains all the data written to each row of our classification file
#[derive(Serialize)]
struct ClassificationRow {
    /// The caller label, e.g. "strelka-snp"
    caller: String,
    /// The tool the label belongs to, e.g. "strelka"
    family: String,
    /// Position of this file within the caller group, 0 is the file chosen when reducing
    rank: usize,
    /// The classified file
    path: String,
}

impl ClassificationRow {
    fn new(label: CallerLabel, rank: usize, path: &Path) -> Self {
        Self {
            caller: label.to_string(),
            family: label.family().to_string(),
            rank,
            path: path.display().to_string()
        }
    }
}

/// Will write one row per classified file to the given file path
/// # Arguments
/// * `result` - the classification to save
/// * `filename` - the filename for the output (tsv/csv)
pub fn write_classification(result: &ClassificationResult, filename: &Path) -> csv::Result<()> {
    // modify the delimiter to "," if it ends with .csv
    let is_csv: bool = filename.extension().unwrap_or_default() == "csv";
    let delimiter: u8 = if is_csv { b',' } else { b'\t' };
    let mut csv_writer: csv::Writer<File> = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(filename)?;

    for (label, rank, path) in result.rows() {
        csv_writer.serialize(ClassificationRow::new(label, rank, path))?;
    }

    csv_writer.flush()?;
    Ok(())
}
