
use clap::Args;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::core::{check_optional_output, check_required_folder, AFTER_HELP, FULL_VERSION};
use crate::parsing::file_listing::{FilterLogic, ListingOptions};

#[derive(Args, Clone, Default, Serialize)]
#[clap(author, about,
    after_help = &**AFTER_HELP
)]
pub struct ClassifySettings {
    #[clap(skip)]
    callsort_version: String,

    /// Patient folder containing the caller outputs
    #[clap(required = true)]
    #[clap(value_name = "DIR")]
    pub folder: PathBuf,

    /// Only keep paths containing this substring (repeatable)
    #[clap(long = "include")]
    #[clap(value_name = "TEXT")]
    #[clap(help_heading = Some("File listing"))]
    pub include: Vec<String>,

    /// Drop paths containing this substring (repeatable)
    #[clap(long = "exclude")]
    #[clap(value_name = "TEXT")]
    #[clap(help_heading = Some("File listing"))]
    pub exclude: Vec<String>,

    /// How multiple --include or --exclude values are combined
    #[clap(long = "logic")]
    #[clap(value_name = "LOGIC")]
    #[clap(help_heading = Some("File listing"))]
    #[clap(default_value = "or")]
    pub logic: FilterLogic,

    /// Follow symbolic links while listing the folder
    #[clap(long = "follow-links")]
    #[clap(help_heading = Some("File listing"))]
    pub follow_links: bool,

    /// Only report the first file found for each caller
    #[clap(long = "reduce")]
    #[clap(help_heading = Some("Classification"))]
    pub reduce: bool,

    /// Pretty-print the classification to stdout
    #[clap(long = "print")]
    #[clap(help_heading = Some("Classification"))]
    pub print: bool,

    /// Optional output JSON file, gzip compressed if it ends with .gz
    #[clap(long = "output-json")]
    #[clap(value_name = "JSON")]
    #[clap(help_heading = Some("Outputs"))]
    pub output_json: Option<PathBuf>,

    /// Optional output table with one row per file, comma-delimited if it ends with .csv
    #[clap(long = "output-tsv")]
    #[clap(value_name = "TSV")]
    #[clap(help_heading = Some("Outputs"))]
    pub output_tsv: Option<PathBuf>,

    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl ClassifySettings {
    /// Builds the listing options from the filter arguments
    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            logic: self.logic
        }
    }
}

pub fn check_classify_settings(mut settings: ClassifySettings) -> anyhow::Result<ClassifySettings> {
    // hard code the version in
    settings.callsort_version = FULL_VERSION.clone();
    info!("callsort version: {:?}", &settings.callsort_version);
    info!("Sub-command: classify");
    info!("Inputs:");

    check_required_folder(&settings.folder, "Patient folder")?;
    check_optional_output(settings.output_json.as_deref(), "Output JSON")?;
    check_optional_output(settings.output_tsv.as_deref(), "Output TSV")?;

    info!("\tPatient folder: {:?}", &settings.folder);
    info!("File listing:");
    info!("\tInclude: {:?}", &settings.include);
    info!("\tExclude: {:?}", &settings.exclude);
    info!("\tLogic: {}", settings.logic);
    info!("\tFollow links: {}", if settings.follow_links { "ENABLED" } else { "DISABLED" });
    info!("Classification:");
    info!("\tReduce: {}", if settings.reduce { "ENABLED" } else { "DISABLED" });

    info!("Outputs:");
    info!("\tPrint: {}", if settings.print { "ENABLED" } else { "DISABLED" });
    if let Some(filename) = settings.output_json.as_deref() {
        info!("\tOutput JSON: {filename:?}");
    }
    if let Some(filename) = settings.output_tsv.as_deref() {
        info!("\tOutput TSV: {filename:?}");
    }

    Ok(settings)
}
