//! Builder for constructing SbomReadModel from domain objects

use super::{SbomEntryView, SbomReadModel};
use crate::sbom_generation::domain::DependencyRecord;

/// Builder for constructing SbomReadModel from dependency records
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds the read model, preserving record order exactly
    pub fn build(records: &[DependencyRecord]) -> SbomReadModel {
        SbomReadModel {
            entries: records.iter().map(Self::build_entry).collect(),
        }
    }

    fn build_entry(record: &DependencyRecord) -> SbomEntryView {
        SbomEntryView {
            name: record.name().to_string(),
            version: record.version().to_string(),
            ecosystem: record.ecosystem().to_string(),
            file_path: record.source_file().to_string_lossy().into_owned(),
            dependency_type: record.relationship().to_string(),
            git_commit: record.revision().map(|r| r.as_str().to_string()),
        }
    }
}
