
use log::{LevelFilter, debug, error, info, trace};
use std::time::Instant;

use callsort::classifier::{CallerOutputClassifier, ClassifierConfigBuilder};
use callsort::cli::classify::{ClassifySettings, check_classify_settings};
use callsort::cli::core::{Commands, get_cli};
use callsort::cli::suffixes::{SuffixSettings, format_suffix_table};
use callsort::data_types::classification::ClassificationResult;
use callsort::data_types::suffix_table::SuffixTable;
use callsort::parsing::file_listing::WalkDirLister;
use callsort::util::json_io::save_json;
use callsort::writers::classification_summary::write_classification;

fn init_logging(verbosity: u8) {
    let filter_level: LevelFilter = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();
}

fn run_classify(settings: ClassifySettings) {
    // start the timer
    let start_time = Instant::now();

    // set up logging before we check the other settings
    init_logging(settings.verbosity);

    let settings = match check_classify_settings(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("Error while verifying settings: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    let classifier_config = match ClassifierConfigBuilder::default()
        .reduce(settings.reduce)
        .verbose(settings.print)
        .build() {
        Ok(cc) => cc,
        Err(e) => {
            error!("Error while building classifier config: {e:?}");
            std::process::exit(exitcode::SOFTWARE);
        }
    };
    let classifier = CallerOutputClassifier::new(
        WalkDirLister::new(settings.follow_links), classifier_config
    );

    info!("Classifying files in {:?}...", settings.folder);
    let result = match classifier.classify(&settings.folder, &settings.listing_options()) {
        Ok(r) => r,
        Err(e) => {
            error!("Error while listing patient folder: {e}");
            std::process::exit(exitcode::IOERR);
        }
    };

    // summarize what we found
    if result.is_empty() {
        info!("No caller outputs were found.");
    }
    match &result {
        ClassificationResult::Grouped(groups) => {
            for (label, paths) in groups.iter() {
                info!("\t{label}: {} file(s)", paths.len());
            }
            for (family, count) in groups.family_counts() {
                info!("Caller {family}: {count} file(s)");
            }
        },
        ClassificationResult::Reduced(reduced) => {
            for (label, path) in reduced.iter() {
                info!("\t{label}: {path:?}");
            }
        }
    }

    if let Some(json_fn) = settings.output_json.as_deref() {
        info!("Saving classification to {json_fn:?}...");
        if let Err(e) = save_json(&result, json_fn) {
            error!("Error while saving JSON file: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    }

    if let Some(tsv_fn) = settings.output_tsv.as_deref() {
        info!("Saving classification table to {tsv_fn:?}...");
        if let Err(e) = write_classification(&result, tsv_fn) {
            error!("Error while saving classification table: {e:#}");
            std::process::exit(exitcode::IOERR);
        }
    }

    info!("Classification completed in {} seconds.", start_time.elapsed().as_secs_f64());
}

fn run_suffixes(settings: SuffixSettings) {
    init_logging(settings.verbosity);
    let table = SuffixTable::default();
    debug!("Built-in suffix table has {} caller labels", table.len());
    for (label, suffixes) in table.iter() {
        trace!("{label} ({}): {suffixes:?}", label.family());
    }
    println!("{}", format_suffix_table(&table));
}

fn main() {
    let cli = get_cli();
    match cli.command {
        Commands::Classify(settings) => {
            run_classify(*settings);
        },
        Commands::Suffixes(settings) => {
            run_suffixes(settings);
        }
    }

    info!("Process finished successfully.");
}
