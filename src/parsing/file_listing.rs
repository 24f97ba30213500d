
use log::trace;
use serde::Serialize;
use std::path::{Path, PathBuf};
use strum_macros::EnumString;
use walkdir::WalkDir;

/// Anything that can turn a folder into a flat list of candidate files.
/// The options and error types belong to the lister; the classifier passes them through without looking at them.
pub trait FileLister {
    /// Lister-specific filtering options
    type Options;
    /// Error returned when the folder cannot be listed
    type Error;

    /// Returns the files under `folder`, in whatever order the lister traverses them.
    fn list_files(&self, folder: &Path, options: &Self::Options) -> Result<Vec<PathBuf>, Self::Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum ListingError {
    #[error("folder does not exist: {0:?}")]
    FolderNotFound(PathBuf),
    #[error("path is not a folder: {0:?}")]
    NotADirectory(PathBuf),
    #[error("error while walking folder: {0}")]
    Walk(#[from] walkdir::Error),
}

/// How multiple substrings in a single filter are combined
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, strum_macros::Display, EnumString, Serialize, clap::ValueEnum)]
pub enum FilterLogic {
    /// Every substring must be present
    #[strum(ascii_case_insensitive, serialize = "and")]
    #[clap(name = "and")]
    #[serde(rename = "and")]
    And,
    /// Any one substring is enough
    #[default]
    #[strum(ascii_case_insensitive, serialize = "or")]
    #[clap(name = "or")]
    #[serde(rename = "or")]
    Or,
}

impl FilterLogic {
    /// Applies this logic to a set of substrings against `text`.
    /// Returns None if there are no substrings, so callers can decide what an empty filter means.
    fn matches(&self, text: &str, substrings: &[String]) -> Option<bool> {
        if substrings.is_empty() {
            return None;
        }
        let found = match self {
            FilterLogic::And => substrings.iter().all(|s| text.contains(s.as_str())),
            FilterLogic::Or => substrings.iter().any(|s| text.contains(s.as_str()))
        };
        Some(found)
    }
}

/// Substring filters applied to the full path of each listed file
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListingOptions {
    /// If non-empty, only paths matching these are kept
    pub include: Vec<String>,
    /// If non-empty, paths matching these are dropped
    pub exclude: Vec<String>,
    /// Combination logic shared by both filters
    pub logic: FilterLogic
}

impl ListingOptions {
    /// Returns true if the path passes both the include and exclude filters
    pub fn is_kept(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        let included = self.logic.matches(&text, &self.include).unwrap_or(true);
        let excluded = self.logic.matches(&text, &self.exclude).unwrap_or(false);
        included && !excluded
    }
}

/// Recursive lister for a folder on disk.
/// Entries are sorted by file name within each directory so the order is stable across runs.
/// Symbolic links to regular files are always listed; `follow_links` only controls descending into linked folders.
#[derive(Clone, Copy, Debug, Default)]
pub struct WalkDirLister {
    /// if true, symbolic links to folders are descended into while walking
    follow_links: bool
}

impl WalkDirLister {
    pub fn new(follow_links: bool) -> Self {
        Self {
            follow_links
        }
    }
}

impl FileLister for WalkDirLister {
    type Options = ListingOptions;
    type Error = ListingError;

    fn list_files(&self, folder: &Path, options: &ListingOptions) -> Result<Vec<PathBuf>, ListingError> {
        if !folder.exists() {
            return Err(ListingError::FolderNotFound(folder.to_path_buf()));
        }
        if !folder.is_dir() {
            return Err(ListingError::NotADirectory(folder.to_path_buf()));
        }

        let mut files = vec![];
        let walker = WalkDir::new(folder)
            .follow_links(self.follow_links)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry?;
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let path = entry.into_path();
            if options.is_kept(&path) {
                files.push(path);
            } else {
                trace!("Filtered out {path:?}");
            }
        }
        Ok(files)
    }
}
