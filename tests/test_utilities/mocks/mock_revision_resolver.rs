use repo_sbom::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock RevisionResolver that answers from a fixed table
///
/// Directories without an entry behave like directories outside version control.
#[derive(Default)]
pub struct MockRevisionResolver {
    revisions: HashMap<PathBuf, String>,
}

impl MockRevisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_revision(mut self, path: impl Into<PathBuf>, revision: &str) -> Self {
        self.revisions.insert(path.into(), revision.to_string());
        self
    }
}

impl RevisionResolver for MockRevisionResolver {
    fn resolve_revision(&self, repository_path: &Path) -> Result<Revision> {
        match self.revisions.get(repository_path) {
            Some(revision) => Revision::new(revision.clone()),
            None => anyhow::bail!("fatal: not a git repository"),
        }
    }
}
