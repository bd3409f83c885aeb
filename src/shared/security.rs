use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum manifest size accepted by the scanner (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Returns true when `path` itself is a symbolic link.
///
/// Uses `symlink_metadata()` so the link is inspected, not its target.
/// A path that cannot be inspected is reported as not being a symlink;
/// callers that need the metadata surface their own error.
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// Reads a file as UTF-8 after checking that it resolves to a regular file
/// no larger than `max_size` bytes.
///
/// Symbolic links are followed; the checks apply to the link target, so a
/// link to a directory, device or FIFO is still rejected.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Human-readable name used in error messages (e.g. "package.json")
/// * `max_size` - Maximum allowed size in bytes
///
/// # Errors
/// Returns an error if any check fails or the content is not valid UTF-8
pub fn read_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
