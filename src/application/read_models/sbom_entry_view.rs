//! Entry view struct for the read model

use serde::Serialize;

/// One output row, with the column names used by both formats
///
/// Field declaration order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SbomEntryView {
    pub name: String,
    pub version: String,
    /// Ecosystem (`pip` or `npm`)
    #[serde(rename = "type")]
    pub ecosystem: String,
    pub file_path: String,
    /// `direct` or `indirect`
    pub dependency_type: String,
    /// Repository revision; `None` when it could not be resolved
    pub git_commit: Option<String>,
}

impl SbomEntryView {
    /// Column headers, in field order
    pub const COLUMNS: [&'static str; 6] = [
        "name",
        "version",
        "type",
        "file_path",
        "dependency_type",
        "git_commit",
    ];
}
