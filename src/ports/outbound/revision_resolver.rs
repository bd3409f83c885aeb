use crate::sbom_generation::domain::Revision;
use crate::shared::Result;
use std::path::Path;

/// RevisionResolver port for looking up a repository's current revision
pub trait RevisionResolver {
    /// Returns the identifier of the most recent commit visible from
    /// `repository_path`.
    ///
    /// # Errors
    /// Returns an error when there is no version control metadata, no
    /// commit yet, or the version control tool is unavailable. The use case
    /// downgrades this to a warning.
    fn resolve_revision(&self, repository_path: &Path) -> Result<Revision>;
}
