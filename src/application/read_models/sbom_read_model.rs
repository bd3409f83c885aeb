//! SBOM read model for query operations

use super::SbomEntryView;

/// Main read model for SBOM data
#[derive(Debug, Clone, Default)]
pub struct SbomReadModel {
    /// One entry per dependency record, in record order
    pub entries: Vec<SbomEntryView>,
}

impl SbomReadModel {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
