use crate::sbom_generation::domain::RepositoryCandidate;
use crate::shared::Result;
use std::path::Path;

/// RepositoryDiscoverer port for locating repositories under a root
pub trait RepositoryDiscoverer {
    /// Walks `root` and returns every directory holding requirements.txt or
    /// package.json, each reported once.
    ///
    /// The order must be deterministic for a given file system state; the
    /// use case processes repositories in exactly this order.
    ///
    /// # Errors
    /// Returns an error if the root itself cannot be traversed
    fn discover(&self, root: &Path) -> Result<Vec<RepositoryCandidate>>;
}
