/*!
# Parsing module
Contains the logic for listing the files in a patient folder.
*/
/// File lister interface and the default recursive implementation
pub mod file_listing;
