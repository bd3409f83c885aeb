use crate::sbom_generation::domain::DependencyRecord;

/// SbomResponse - Result of a completed scan
///
/// `records` keeps discovery order: repositories in walk order, and within a
/// repository requirements.txt, then package.json, then package-lock.json.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// Every dependency record found, never deduplicated
    pub records: Vec<DependencyRecord>,
    /// Number of repositories that were scanned
    pub repository_count: usize,
}

impl SbomResponse {
    pub fn new(records: Vec<DependencyRecord>, repository_count: usize) -> Self {
        Self {
            records,
            repository_count,
        }
    }

    /// True when repositories existed but none declared a dependency
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
