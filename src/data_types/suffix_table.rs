
use indexmap::IndexMap;
use std::path::Path;

use crate::data_types::caller_label::CallerLabel;

/// The filename suffixes each caller is expected to write, in lookup order.
/// Note that the two VarScan rows look swapped (the snp label gets the indel file and vice versa).
/// They are kept as-is because downstream consumers key off these exact labels.
const CALLER_SUFFIXES: [(CallerLabel, &[&str]); 7] = [
    (CallerLabel::Muse, &[".Muse.vcf"]),
    (CallerLabel::Mutect2, &[".mutect2.vcf"]),
    (CallerLabel::SomaticSniper, &[".somaticsniper.vcf"]),
    (CallerLabel::StrelkaIndel, &[".passed.somatic.indels.vcf.strelka.vcf"]),
    (CallerLabel::StrelkaSnp, &[".passed.somatic.snvs.vcf.strelka.vcf"]),
    (CallerLabel::VarscanSnp, &[".raw.indel.vcf"]),
    (CallerLabel::VarscanIndel, &[".raw.snp.vcf"]),
];

/// Lookup from a caller label to the suffixes that identify its outputs.
/// Iteration (and therefore matching) follows insertion order, so the first matching label wins.
#[derive(Clone, Debug)]
pub struct SuffixTable {
    /// Ordered label to suffix list
    entries: IndexMap<CallerLabel, Vec<String>>
}

impl Default for SuffixTable {
    fn default() -> Self {
        let entries = CALLER_SUFFIXES.iter()
            .map(|(label, suffixes)| {
                (*label, suffixes.iter().map(|s| s.to_string()).collect())
            })
            .collect();
        Self {
            entries
        }
    }
}

impl SuffixTable {
    #[cfg(test)]
    fn from_entries(entries: Vec<(CallerLabel, Vec<&str>)>) -> Self {
        let entries = entries.into_iter()
            .map(|(label, suffixes)| (label, suffixes.into_iter().map(String::from).collect()))
            .collect();
        Self {
            entries
        }
    }

    /// Returns the first label with a suffix that `filename` ends with, or None if nothing matches.
    /// # Arguments
    /// * `filename` - the file name or full path to check
    pub fn lookup(&self, filename: &str) -> Option<CallerLabel> {
        self.entries.iter()
            .find(|(_label, suffixes)| suffixes.iter().any(|s| filename.ends_with(s.as_str())))
            .map(|(label, _suffixes)| *label)
    }

    /// Same as `lookup(...)`, but for a path. Non-UTF-8 components are replaced lossily before matching.
    pub fn lookup_path(&self, path: &Path) -> Option<CallerLabel> {
        self.lookup(&path.to_string_lossy())
    }

    /// Iterates over (label, suffixes) in lookup order
    pub fn iter(&self) -> impl Iterator<Item = (&CallerLabel, &[String])> {
        self.entries.iter().map(|(label, suffixes)| (label, suffixes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
