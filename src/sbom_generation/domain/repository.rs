use super::ManifestKind;
use std::path::{Path, PathBuf};

/// A directory that holds at least one marker manifest.
///
/// Lives only for the duration of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCandidate {
    path: PathBuf,
    manifests: Vec<ManifestKind>,
}

impl RepositoryCandidate {
    /// Builds a candidate from the manifests found in `path`.
    ///
    /// Returns `None` when none of them is a marker (requirements.txt or
    /// package.json). Manifests are kept in processing order regardless of
    /// the order they were found in.
    pub fn from_manifests(
        path: PathBuf,
        found: impl IntoIterator<Item = ManifestKind>,
    ) -> Option<Self> {
        let found: Vec<ManifestKind> = found.into_iter().collect();
        if !found.iter().any(|kind| kind.is_marker()) {
            return None;
        }

        let manifests = ManifestKind::ALL
            .into_iter()
            .filter(|kind| found.contains(kind))
            .collect();

        Some(Self { path, manifests })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifests(&self) -> &[ManifestKind] {
        &self.manifests
    }

    pub fn has(&self, kind: ManifestKind) -> bool {
        self.manifests.contains(&kind)
    }

    pub fn manifest_path(&self, kind: ManifestKind) -> PathBuf {
        self.path.join(kind.file_name())
    }
}
