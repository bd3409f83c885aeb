use crate::ports::outbound::ManifestReader;
use crate::shared::error::SbomError;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading manifests from the file system
///
/// Every read goes through the file-safety checks: the path (or the target
/// of a symbolic link) must be a regular file and the size is bounded.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Overrides the size limit (used by tests)
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        let description = manifest_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("manifest");

        read_regular_file(manifest_path, description, self.max_file_size).map_err(|e| {
            SbomError::FileReadError {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
