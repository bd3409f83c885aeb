mod directory_filter;
mod manifest_parser;

pub use directory_filter::DirectoryFilter;
pub use manifest_parser::{ManifestError, ManifestParser};
