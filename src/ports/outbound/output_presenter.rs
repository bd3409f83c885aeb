use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where a rendered SBOM ends up.
pub trait OutputPresenter {
    /// Presents the formatted SBOM content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - The destination is a symbolic link
    fn present(&self, content: &str) -> Result<()>;
}
