use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading manifest contents
///
/// This port abstracts the file system operations needed to load a
/// requirements.txt, package.json or package-lock.json.
pub trait ManifestReader {
    /// Reads one manifest file
    ///
    /// # Arguments
    /// * `manifest_path` - Full path of the manifest to read
    ///
    /// # Returns
    /// The raw content of the manifest as a string
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or fails the
    /// file-safety checks. Callers treat this as recoverable.
    fn read_manifest(&self, manifest_path: &Path) -> Result<String>;
}
