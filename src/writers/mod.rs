/*!
# Writers module
Contains the logic for writing classification outputs to file.
*/
/// Writes a classification out as a delimited table
pub mod classification_summary;
