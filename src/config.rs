//! Configuration file support for repo-sbom.
//!
//! Provides YAML-based configuration through `repo-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::SbomError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "repo-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Directory-name patterns pruned from the discovery walk
    pub exclude_dirs: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Merges the file's exclusion patterns with those given on the command
    /// line. File patterns come first.
    pub fn merged_excludes(&self, cli_patterns: &[String]) -> Vec<String> {
        self.exclude_dirs
            .iter()
            .flatten()
            .chain(cli_patterns)
            .cloned()
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes to null, which is the same as no settings
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config, path);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "Using config file");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref exclude_dirs) = config.exclude_dirs {
        for (i, pattern) in exclude_dirs.iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(SbomError::Config {
                    message: format!(
                        "exclude_dirs[{}] must not be empty.\n\n\
                         💡 Hint: Each entry is a directory name pattern (e.g., \"node_modules\" or \"venv*\").",
                        i
                    ),
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile, path: &Path) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!(
            path = %path.display(),
            "Unknown config field '{}' will be ignored.",
            key
        );
    }
}
