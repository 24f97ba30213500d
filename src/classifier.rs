/*!
# Caller output classifier
Sorts the files in a patient folder by the variant caller that produced them.
Classification only looks at the filename suffix, the file contents are never opened.

## Example usage
```rust
use callsort::classifier::{CallerOutputClassifier, ClassifierConfigBuilder};
use callsort::data_types::caller_label::CallerLabel;
use callsort::parsing::file_listing::FileLister;
use std::convert::Infallible;
use std::path::{Path, PathBuf};

// a lister that always returns the same files
struct FixedLister(Vec<PathBuf>);
impl FileLister for FixedLister {
    type Options = ();
    type Error = Infallible;
    fn list_files(&self, _folder: &Path, _options: &()) -> Result<Vec<PathBuf>, Infallible> {
        Ok(self.0.clone())
    }
}

let lister = FixedLister(vec![
    PathBuf::from("a.Muse.vcf"), PathBuf::from("b.mutect2.vcf"),
    PathBuf::from("c.unknown.txt"), PathBuf::from("d.Muse.vcf")
]);
let classifier = CallerOutputClassifier::new(lister, Default::default());
let groups = classifier.classify_grouped(Path::new("patient"), &()).unwrap();
assert_eq!(groups.get(CallerLabel::Muse).unwrap().len(), 2);

// only keep the first file per caller
let config = ClassifierConfigBuilder::default()
    .reduce(true)
    .build().unwrap();
let classifier = CallerOutputClassifier::new(classifier.into_lister(), config);
let result = classifier.classify(Path::new("patient"), &()).unwrap();
assert_eq!(result.rows().len(), 2);
```
*/
use derive_builder::Builder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::data_types::caller_label::CallerLabel;
use crate::data_types::classification::{CallerGroups, ClassificationResult, ReducedCallers};
use crate::data_types::suffix_table::SuffixTable;
use crate::parsing::file_listing::FileLister;

/// Controls the output shape of `CallerOutputClassifier::classify(...)`
#[derive(Builder, Clone, Copy, Debug, Default)]
#[builder(default)]
pub struct ClassifierConfig {
    /// if true, only the first file found for each caller is returned
    reduce: bool,
    /// if true, the result is pretty-printed to stdout before returning
    verbose: bool
}

impl ClassifierConfig {
    pub fn reduce(&self) -> bool {
        self.reduce
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Searches a patient folder for the outputs of each variant caller.
/// The folder is listed by the injected `FileLister`, and each call is independent of the previous ones.
pub struct CallerOutputClassifier<L: FileLister> {
    /// Provides the files to classify
    lister: L,
    /// Output controls
    config: ClassifierConfig,
    /// Suffix lookup, fixed at construction
    suffixes: SuffixTable
}

impl<L: FileLister> CallerOutputClassifier<L> {
    /// Creates a new classifier with the default suffix table.
    /// # Arguments
    /// * `lister` - used to convert a folder into a list of files
    /// * `config` - controls reduction and printing
    pub fn new(lister: L, config: ClassifierConfig) -> Self {
        Self {
            lister,
            config,
            suffixes: SuffixTable::default()
        }
    }

    /// Lists `folder` and classifies the files, returning the shape selected by the config.
    /// If verbose is enabled, the result is also printed.
    /// # Arguments
    /// * `folder` - the patient folder
    /// * `options` - passed through to the lister untouched
    /// # Errors
    /// * if the lister fails, its error is returned as-is
    pub fn classify(&self, folder: &Path, options: &L::Options) -> Result<ClassificationResult, L::Error> {
        let groups = self.classify_grouped(folder, options)?;
        let result = if self.config.reduce {
            ClassificationResult::Reduced(groups.reduce())
        } else {
            ClassificationResult::Grouped(groups)
        };

        if self.config.verbose {
            println!("{result}");
        }
        Ok(result)
    }

    /// Lists `folder` and returns every matching file for each caller.
    /// Ignores the `reduce` and `verbose` settings.
    /// # Errors
    /// * if the lister fails, its error is returned as-is
    pub fn classify_grouped(&self, folder: &Path, options: &L::Options) -> Result<CallerGroups, L::Error> {
        let file_list = self.lister.list_files(folder, options)?;
        debug!("Classifying {} files from {folder:?}", file_list.len());
        Ok(self.group_paths(file_list))
    }

    /// Lists `folder` and returns the first matching file for each caller.
    /// Ignores the `reduce` and `verbose` settings.
    /// # Errors
    /// * if the lister fails, its error is returned as-is
    pub fn classify_reduced(&self, folder: &Path, options: &L::Options) -> Result<ReducedCallers, L::Error> {
        Ok(self.classify_grouped(folder, options)?.reduce())
    }

    /// Groups an already listed set of files by caller. Files that do not match any caller are dropped.
    /// # Arguments
    /// * `file_list` - the files, in discovery order
    pub fn group_paths<I>(&self, file_list: I) -> CallerGroups
    where
        I: IntoIterator<Item = PathBuf>
    {
        let mut groups = CallerGroups::default();
        for path in file_list {
            match self.classify_path(&path) {
                Some(label) => {
                    debug!("{label}: {path:?}");
                    groups.push(label, path);
                },
                None => {
                    trace!("No caller match: {path:?}");
                }
            }
        }
        groups
    }

    /// Returns the caller that produced `path`, or None if no suffix matches
    pub fn classify_path(&self, path: &Path) -> Option<CallerLabel> {
        self.suffixes.lookup_path(path)
    }

    pub fn suffix_table(&self) -> &SuffixTable {
        &self.suffixes
    }

    pub fn config(&self) -> ClassifierConfig {
        self.config
    }

    /// Consumes the classifier, giving back the lister
    pub fn into_lister(self) -> L {
        self.lister
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// In-memory lister keyed by folder; records the options it receives
    #[derive(Default)]
    struct MockLister {
        folders: BTreeMap<PathBuf, Vec<PathBuf>>,
        seen_options: RefCell<Vec<String>>
    }

    impl MockLister {
        fn with_folder(folder: &str, files: &[&str]) -> Self {
            let mut folders = BTreeMap::new();
            folders.insert(PathBuf::from(folder), files.iter().map(PathBuf::from).collect());
            Self {
                folders,
                ..Default::default()
            }
        }
    }

    impl FileLister for MockLister {
        type Options = String;
        type Error = String;

        fn list_files(&self, folder: &Path, options: &String) -> Result<Vec<PathBuf>, String> {
            self.seen_options.borrow_mut().push(options.clone());
            self.folders.get(folder)
                .cloned()
                .ok_or(format!("missing folder {folder:?}"))
        }
    }

    fn paths(v: &[&str]) -> Vec<PathBuf> {
        v.iter().map(PathBuf::from).collect()
    }

    fn reduce_config() -> ClassifierConfig {
        ClassifierConfigBuilder::default()
            .reduce(true)
            .build().unwrap()
    }

    const PATIENT: &str = "TCGA-2H-A9GF";
    const LISTING: [&str; 4] = ["a.Muse.vcf", "b.mutect2.vcf", "c.unknown.txt", "d.Muse.vcf"];

    #[test]
    fn test_config_defaults() {
        let config = ClassifierConfig::default();
        assert!(!config.reduce());
        assert!(!config.verbose());

        let config = ClassifierConfigBuilder::default().verbose(true).build().unwrap();
        assert!(!config.reduce());
        assert!(config.verbose());
    }

    #[test]
    fn test_grouped() {
        let classifier = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &LISTING), ClassifierConfig::default());
        let result = classifier.classify(Path::new(PATIENT), &String::new()).unwrap();

        let mut expected = CallerGroups::default();
        expected.push(CallerLabel::Muse, PathBuf::from("a.Muse.vcf"));
        expected.push(CallerLabel::Muse, PathBuf::from("d.Muse.vcf"));
        expected.push(CallerLabel::Mutect2, PathBuf::from("b.mutect2.vcf"));
        assert_eq!(result, ClassificationResult::Grouped(expected.clone()));

        // the fixed-shape entry point gives the same thing
        let groups = classifier.classify_grouped(Path::new(PATIENT), &String::new()).unwrap();
        assert_eq!(groups, expected);
        assert_eq!(groups.get(CallerLabel::Muse).unwrap(), paths(&["a.Muse.vcf", "d.Muse.vcf"]).as_slice());
        assert_eq!(groups.get(CallerLabel::Mutect2).unwrap(), paths(&["b.mutect2.vcf"]).as_slice());
        assert_eq!(groups.num_files(), 3);
    }

    #[test]
    fn test_reduced() {
        let classifier = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &LISTING), reduce_config());
        let result = classifier.classify(Path::new(PATIENT), &String::new()).unwrap();

        let reduced = match result {
            ClassificationResult::Reduced(r) => r,
            ClassificationResult::Grouped(_) => panic!("expected a reduced result")
        };
        assert_eq!(reduced.len(), 2);
        assert_eq!(reduced.get(CallerLabel::Muse).unwrap(), Path::new("a.Muse.vcf"));
        assert_eq!(reduced.get(CallerLabel::Mutect2).unwrap(), Path::new("b.mutect2.vcf"));

        // the same as taking the first of each group
        let grouped = classifier.classify_grouped(Path::new(PATIENT), &String::new()).unwrap();
        assert_eq!(grouped.reduce(), reduced);
        assert_eq!(classifier.classify_reduced(Path::new(PATIENT), &String::new()).unwrap(), reduced);
    }

    #[test]
    fn test_empty_and_unmatched() {
        for config in [ClassifierConfig::default(), reduce_config()] {
            let classifier = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &[]), config);
            let result = classifier.classify(Path::new(PATIENT), &String::new()).unwrap();
            assert!(result.is_empty());

            let unmatched = ["notes.txt", "a.Muse.vcf.gz", "a.Muse.vcf.tbi", "Muse.vcf"];
            let classifier = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &unmatched), config);
            let result = classifier.classify(Path::new(PATIENT), &String::new()).unwrap();
            assert!(result.is_empty());
        }
    }

    #[test]
    fn test_order_preserved() {
        let listing = [
            "z/p1.raw.snp.vcf",
            "a/p2.Muse.vcf",
            "m/p3.raw.snp.vcf",
            "b/p4.raw.snp.vcf",
        ];
        let classifier = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &listing), ClassifierConfig::default());
        let groups = classifier.classify_grouped(Path::new(PATIENT), &String::new()).unwrap();

        // listing order, not sorted; labels in order of first appearance
        assert_eq!(
            groups.get(CallerLabel::VarscanIndel).unwrap(),
            paths(&["z/p1.raw.snp.vcf", "m/p3.raw.snp.vcf", "b/p4.raw.snp.vcf"]).as_slice()
        );
        let labels: Vec<CallerLabel> = groups.iter().map(|(l, _p)| *l).collect();
        assert_eq!(labels, vec![CallerLabel::VarscanIndel, CallerLabel::Muse]);

        let reduced = classifier.classify_reduced(Path::new(PATIENT), &String::new()).unwrap();
        assert_eq!(reduced.get(CallerLabel::VarscanIndel).unwrap(), Path::new("z/p1.raw.snp.vcf"));
    }

    #[test]
    fn test_every_label() {
        let listing = [
            "p.Muse.vcf",
            "p.mutect2.vcf",
            "p.somaticsniper.vcf",
            "p.passed.somatic.indels.vcf.strelka.vcf",
            "p.passed.somatic.snvs.vcf.strelka.vcf",
            "p.raw.indel.vcf",
            "p.raw.snp.vcf",
        ];
        let classifier = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &listing), reduce_config());
        let reduced = classifier.classify_reduced(Path::new(PATIENT), &String::new()).unwrap();
        assert_eq!(reduced.len(), 7);
        assert_eq!(reduced.get(CallerLabel::VarscanSnp).unwrap(), Path::new("p.raw.indel.vcf"));
        assert_eq!(reduced.get(CallerLabel::VarscanIndel).unwrap(), Path::new("p.raw.snp.vcf"));
        assert_eq!(reduced.get(CallerLabel::StrelkaIndel).unwrap(), Path::new("p.passed.somatic.indels.vcf.strelka.vcf"));
    }

    #[test]
    fn test_verbose_same_result() {
        let verbose_config = ClassifierConfigBuilder::default()
            .verbose(true)
            .build().unwrap();
        let quiet = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &LISTING), ClassifierConfig::default());
        let verbose = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &LISTING), verbose_config);
        assert_eq!(
            verbose.classify(Path::new(PATIENT), &String::new()).unwrap(),
            quiet.classify(Path::new(PATIENT), &String::new()).unwrap()
        );

        // printing also leaves the reduced shape alone
        let verbose_reduce = ClassifierConfigBuilder::default()
            .reduce(true)
            .verbose(true)
            .build().unwrap();
        let verbose = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &LISTING), verbose_reduce);
        let quiet = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &LISTING), reduce_config());
        assert_eq!(
            verbose.classify(Path::new(PATIENT), &String::new()).unwrap(),
            quiet.classify(Path::new(PATIENT), &String::new()).unwrap()
        );
    }

    #[test]
    fn test_idempotent() {
        let classifier = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &LISTING), ClassifierConfig::default());
        let first = classifier.classify(Path::new(PATIENT), &String::new()).unwrap();
        let second = classifier.classify(Path::new(PATIENT), &String::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_options_forwarded() {
        let classifier = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &LISTING), ClassifierConfig::default());
        let options = "exclude=strelka,chromosome;logic=and".to_string();
        classifier.classify(Path::new(PATIENT), &options).unwrap();
        classifier.classify_reduced(Path::new(PATIENT), &String::new()).unwrap();

        let lister = classifier.into_lister();
        assert_eq!(lister.seen_options.into_inner(), vec![options, String::new()]);
    }

    #[test]
    fn test_lister_error_propagates() {
        let classifier = CallerOutputClassifier::new(MockLister::with_folder(PATIENT, &LISTING), ClassifierConfig::default());
        let result = classifier.classify(Path::new("missing"), &String::new());
        assert_eq!(result, Err("missing folder \"missing\"".to_string()));
    }

    #[test]
    fn test_group_paths_direct() {
        let classifier = CallerOutputClassifier::new(MockLister::default(), ClassifierConfig::default());
        let groups = classifier.group_paths(paths(&LISTING));
        assert_eq!(groups.len(), 2);
        assert_eq!(classifier.classify_path(Path::new("x.somaticsniper.vcf")), Some(CallerLabel::SomaticSniper));
        assert_eq!(classifier.classify_path(Path::new("c.unknown.txt")), None);
        assert_eq!(classifier.suffix_table().len(), 7);
    }
}
