
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::data_types::caller_label::{CallerFamily, CallerLabel};

/// All files found for each caller label.
/// Labels are kept in the order they were first seen, and files within a label keep their listing order.
/// Every label that is present has at least one file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CallerGroups {
    groups: IndexMap<CallerLabel, Vec<PathBuf>>
}

impl CallerGroups {
    /// Appends a file to the group for `label`, creating the group if this is the first file for it.
    pub fn push(&mut self, label: CallerLabel, path: PathBuf) {
        self.groups.entry(label).or_default().push(path);
    }

    /// Collapses every group down to its first file, dropping the rest.
    pub fn reduce(&self) -> ReducedCallers {
        let outputs = self.groups.iter()
            .filter_map(|(label, paths)| {
                paths.first().map(|p| (*label, p.clone()))
            })
            .collect();
        ReducedCallers {
            outputs
        }
    }

    /// Number of files found for each tool, in the order the tools were first seen
    pub fn family_counts(&self) -> IndexMap<CallerFamily, usize> {
        let mut counts: IndexMap<CallerFamily, usize> = IndexMap::new();
        for (label, paths) in self.groups.iter() {
            *counts.entry(label.family()).or_default() += paths.len();
        }
        counts
    }

    pub fn get(&self, label: CallerLabel) -> Option<&[PathBuf]> {
        self.groups.get(&label).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CallerLabel, &[PathBuf])> {
        self.groups.iter().map(|(label, paths)| (label, paths.as_slice()))
    }

    /// Number of labels with at least one file
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of classified files across all labels
    pub fn num_files(&self) -> usize {
        self.groups.values().map(|v| v.len()).sum()
    }
}

/// A single representative file for each caller label that was found.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReducedCallers {
    outputs: IndexMap<CallerLabel, PathBuf>
}

impl ReducedCallers {
    pub fn get(&self, label: CallerLabel) -> Option<&Path> {
        self.outputs.get(&label).map(|p| p.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CallerLabel, &Path)> {
        self.outputs.iter().map(|(label, path)| (label, path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

/// Output of a classifier run, the shape depends on whether reduction was enabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClassificationResult {
    /// Every matching file for each label
    Grouped(CallerGroups),
    /// Only the first matching file for each label
    Reduced(ReducedCallers)
}

impl ClassificationResult {
    /// Flattens either shape into (label, rank, path) rows, where rank is the position within the label's group.
    pub fn rows(&self) -> Vec<(CallerLabel, usize, &Path)> {
        match self {
            ClassificationResult::Grouped(groups) => {
                groups.iter()
                    .flat_map(|(label, paths)| {
                        paths.iter().enumerate().map(move |(rank, p)| (*label, rank, p.as_path()))
                    })
                    .collect()
            },
            ClassificationResult::Reduced(reduced) => {
                reduced.iter()
                    .map(|(label, path)| (*label, 0, path))
                    .collect()
            }
        }
    }

    /// Labels found, in order of first appearance
    pub fn labels(&self) -> Vec<CallerLabel> {
        match self {
            ClassificationResult::Grouped(groups) => groups.iter().map(|(l, _p)| *l).collect(),
            ClassificationResult::Reduced(reduced) => reduced.iter().map(|(l, _p)| *l).collect()
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ClassificationResult::Grouped(groups) => groups.is_empty(),
            ClassificationResult::Reduced(reduced) => reduced.is_empty()
        }
    }
}

impl std::fmt::Display for ClassificationResult {
    /// Pretty-prints one label per line, with grouped files indented underneath.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{{}}");
        }
        writeln!(f, "{{")?;
        match self {
            ClassificationResult::Grouped(groups) => {
                for (label, paths) in groups.iter() {
                    writeln!(f, "    {:?}: [", label.to_string())?;
                    for p in paths.iter() {
                        writeln!(f, "        {:?},", p.display().to_string())?;
                    }
                    writeln!(f, "    ],")?;
                }
            },
            ClassificationResult::Reduced(reduced) => {
                for (label, path) in reduced.iter() {
                    writeln!(f, "    {:?}: {:?},", label.to_string(), path.display().to_string())?;
                }
            }
        }
        write!(f, "}}")
    }
}
