
/// Caller labels and the tools they belong to
pub mod caller_label;
/// Grouped and reduced classification results
pub mod classification;
/// Fixed lookup from filename suffix to caller label
pub mod suffix_table;
