use crate::application::read_models::{SbomEntryView, SbomReadModel};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;

/// Record terminator used for every CSV line, header included
const LINE_TERMINATOR: &str = "\r\n";

/// CsvFormatter adapter for generating the tabular SBOM
///
/// Writes a header row followed by one row per entry. Fields are quoted
/// only when they contain a comma, a double quote or a line break; a
/// missing revision is written as an empty field.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\r', '\n']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn push_row<'a>(output: &mut String, fields: impl IntoIterator<Item = &'a str>) {
        let row: Vec<String> = fields.into_iter().map(Self::escape_field).collect();
        output.push_str(&row.join(","));
        output.push_str(LINE_TERMINATOR);
    }

    fn entry_fields(entry: &SbomEntryView) -> [&str; 6] {
        [
            entry.name.as_str(),
            entry.version.as_str(),
            entry.ecosystem.as_str(),
            entry.file_path.as_str(),
            entry.dependency_type.as_str(),
            entry.git_commit.as_deref().unwrap_or(""),
        ]
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CsvFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let mut output = String::new();
        Self::push_row(&mut output, SbomEntryView::COLUMNS);
        for entry in &model.entries {
            Self::push_row(&mut output, Self::entry_fields(entry));
        }
        Ok(output)
    }
}
