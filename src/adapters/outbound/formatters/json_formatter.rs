use crate::application::read_models::SbomReadModel;
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Indentation used for the JSON document
const INDENT: &[u8] = b"    ";

/// JsonFormatter adapter for generating the JSON SBOM
///
/// The document is an array of objects, one per entry, keyed by column name.
/// A missing revision is written as `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for JsonFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
        model
            .entries
            .serialize(&mut serializer)
            .map_err(|e| anyhow::anyhow!("Failed to serialize SBOM to JSON: {}", e))?;

        Ok(String::from_utf8(buffer)?)
    }
}
