use crate::application::read_models::SbomReadModel;
use crate::shared::Result;

/// SbomFormatter port for rendering the SBOM
///
/// Implemented once per output representation (CSV, JSON).
pub trait SbomFormatter {
    /// Renders every entry of the read model, in model order
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &SbomReadModel) -> Result<String>;
}
