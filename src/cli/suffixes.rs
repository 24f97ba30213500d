
use clap::Args;

use crate::cli::core::AFTER_HELP;
use crate::data_types::suffix_table::SuffixTable;

#[derive(Args, Clone, Default)]
#[clap(author, about,
    after_help = &**AFTER_HELP
)]
pub struct SuffixSettings {
    /// Enable verbose output.
    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Renders the suffix table as a tab-delimited table with a header, in lookup order.
pub fn format_suffix_table(table: &SuffixTable) -> String {
    let mut lines = vec!["caller\tfamily\tsuffixes".to_string()];
    for (label, suffixes) in table.iter() {
        lines.push(format!("{label}\t{}\t{}", label.family(), suffixes.join(",")));
    }
    lines.join("\n")
}
