/// Output format enumeration for SBOM generation
///
/// Every run that finds dependencies writes all formats, in `ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tabular form, `sbom.csv`
    Csv,
    /// Array of objects, `sbom.json`
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Csv, OutputFormat::Json];

    /// File name the format is written to inside the scanned root
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Csv => "sbom.csv",
            OutputFormat::Json => "sbom.json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(OutputFormat::Csv.file_name(), "sbom.csv");
        assert_eq!(OutputFormat::Json.file_name(), "sbom.json");
    }

    #[test]
    fn test_display() {
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_csv_is_written_first() {
        assert_eq!(OutputFormat::ALL, [OutputFormat::Csv, OutputFormat::Json]);
    }
}
