use crate::ports::outbound::RepositoryDiscoverer;
use crate::sbom_generation::domain::{ManifestKind, RepositoryCandidate};
use crate::sbom_generation::services::DirectoryFilter;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemDiscoverer adapter for locating repositories on disk
///
/// Walks the tree below the scan root in sorted pre-order: a directory is
/// reported before anything beneath it and siblings are visited by name.
/// Symbolic links to directories are not followed, but a manifest that is a
/// symbolic link to a regular file counts. Directories whose name matches
/// the exclusion filter are pruned together with their subtree; the root
/// itself is always visited.
pub struct FileSystemDiscoverer {
    filter: DirectoryFilter,
}

impl FileSystemDiscoverer {
    pub fn new(filter: DirectoryFilter) -> Self {
        Self { filter }
    }

    fn walk(&self, dir: &Path, out: &mut Vec<RepositoryCandidate>) -> Result<()> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            entries.push(entry?);
        }
        entries.sort_by_key(|entry| entry.file_name());

        let mut manifests = Vec::new();
        let mut subdirectories = Vec::new();

        for entry in entries {
            // file_type() does not traverse symlinks
            let file_type = entry.file_type()?;
            let name = entry.file_name();

            if file_type.is_dir() {
                let excluded = name.to_str().is_some_and(|n| self.filter.is_excluded(n));
                if excluded {
                    tracing::debug!(
                        directory = %entry.path().display(),
                        "Skipping excluded directory"
                    );
                } else {
                    subdirectories.push(entry.path());
                }
            } else if let Some(kind) = name.to_str().and_then(ManifestKind::from_file_name) {
                if file_type.is_file() || is_link_to_file(&entry.path(), file_type) {
                    manifests.push(kind);
                }
            }
        }

        if let Some(candidate) = RepositoryCandidate::from_manifests(dir.to_path_buf(), manifests) {
            out.push(candidate);
        }

        for subdirectory in subdirectories {
            if let Err(e) = self.walk(&subdirectory, out) {
                tracing::warn!(
                    directory = %subdirectory.display(),
                    "Skipping unreadable directory: {:#}",
                    e
                );
            }
        }

        Ok(())
    }
}

/// True for a symbolic link whose target (followed) is a regular file
fn is_link_to_file(path: &Path, file_type: fs::FileType) -> bool {
    file_type.is_symlink() && fs::metadata(path).is_ok_and(|m| m.is_file())
}

impl RepositoryDiscoverer for FileSystemDiscoverer {
    fn discover(&self, root: &Path) -> Result<Vec<RepositoryCandidate>> {
        let mut repositories = Vec::new();
        self.walk(root, &mut repositories)
            .map_err(|e| SbomError::InvalidRootPath {
                path: root.to_path_buf(),
                reason: format!("Failed to read directory: {:#}", e),
            })?;

        tracing::debug!(
            root = %root.display(),
            count = repositories.len(),
            "Repository discovery finished"
        );
        Ok(repositories)
    }
}
