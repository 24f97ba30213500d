/*!
# CLI module
Command line interface functionality that is specific to callsort.
*/

/// The main CLI module that contains the top-level CLI parser and help text
pub mod core;
/// The classify CLI subcommand
pub mod classify;
/// The suffixes CLI subcommand
pub mod suffixes;
