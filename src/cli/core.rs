
use anyhow::bail;
use clap::{Parser, Subcommand};
use chrono::Datelike;
use lazy_static::lazy_static;
use std::path::Path;

use crate::cli::classify::ClassifySettings;
use crate::cli::suffixes::SuffixSettings;

lazy_static! {
    /// Stores the full version string we plan to use, which is generated in build.rs
    /// # Examples
    /// * `0.1.0-6bb9635-dirty` - while on a dirty branch
    /// * `0.1.0-6bb9635` - with a fresh commit
    pub static ref FULL_VERSION: String = format!("{}-{}", env!("CARGO_PKG_VERSION"), env!("VERGEN_GIT_DESCRIBE"));

    /// Shared after help string containing the legalese.
    pub static ref AFTER_HELP: String = format!("Copyright (C) 2019-{} The callsort developers
This program comes with ABSOLUTELY NO WARRANTY; it is intended for
Research Use Only and not for use in diagnostic procedures.", chrono::Utc::now().year());
}

#[derive(Parser)]
#[clap(author,
    version = &**FULL_VERSION,
    about,
    after_help = &**AFTER_HELP)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

/// callsort, sorts variant caller outputs by the caller that wrote them.
/// Select a subcommand to see more usage information:
#[derive(Subcommand)]
pub enum Commands {
    /// Classifies the files in a patient folder by variant caller
    Classify(Box<ClassifySettings>),
    /// Shows the filename suffixes used to identify each caller
    Suffixes(SuffixSettings)
}

pub fn get_cli() -> Cli {
    Cli::parse()
}

/// Checks if a folder exists and is a directory
/// # Arguments
/// * `folder` - the folder path to check for
/// * `label` - the label to use for error messages
pub fn check_required_folder(folder: &Path, label: &str) -> anyhow::Result<()> {
    if !folder.exists() {
        bail!("{} does not exist: \"{}\"", label, folder.display());
    }
    if !folder.is_dir() {
        bail!("{} is not a folder: \"{}\"", label, folder.display());
    }

    // folder exists
    Ok(())
}

/// Checks that the parent folder of an optional output file exists
/// # Arguments
/// * `opt_filename` - the output file, if any
/// * `label` - the label to use for error messages
pub fn check_optional_output(opt_filename: Option<&Path>, label: &str) -> anyhow::Result<()> {
    if let Some(filename) = opt_filename {
        let parent = filename.parent().unwrap_or(Path::new(""));
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            bail!("{} folder does not exist: \"{}\"", label, parent.display());
        }
    }

    // output either was not specified OR it has somewhere to go
    Ok(())
}
