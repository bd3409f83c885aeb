use clap::Parser;
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Generate a CSV and JSON SBOM for every pip and npm repository under a directory
#[derive(Parser, Debug)]
#[command(name = "repo-sbom")]
#[command(version)]
#[command(
    about = "Generate a CSV and JSON SBOM for every pip and npm repository under a directory",
    long_about = None
)]
pub struct Args {
    /// Root directory to scan; sbom.csv and sbom.json are written here
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Path to a config file (defaults to repo-sbom.config.yml in DIRECTORY)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip directories whose name matches the pattern (supports wildcards: *)
    /// Can be specified multiple times: -e "node_modules" -e "venv*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_is_required() {
        let result = Args::try_parse_from(["repo-sbom"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["repo-sbom", "/scan"]).unwrap();
        assert_eq!(args.directory, PathBuf::from("/scan"));
        assert!(args.config.is_none());
        assert!(args.exclude.is_empty());
        assert_eq!(args.log_format, LogFormat::Text);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "repo-sbom",
            "--config",
            "custom.yml",
            "-e",
            "node_modules",
            "--exclude",
            "venv*",
            "--log-format",
            "json",
            "/scan",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(args.exclude, vec!["node_modules", "venv*"]);
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let result = Args::try_parse_from(["repo-sbom", "--log-format", "xml", "/scan"]);
        assert!(result.is_err());
    }
}
