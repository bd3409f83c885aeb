use crate::sbom_generation::domain::{DeclaredDependency, ManifestKind};
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Marker that makes a requirements line a pinned dependency
const PIN_MARKER: &str = "==";

/// Line terminators of requirements files (LF, CRLF and CR-only)
const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Recoverable failure to interpret one manifest.
///
/// The caller logs it and treats the manifest as declaring nothing.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Invalid JSON in {path}: {details}")]
    InvalidJson { path: String, details: String },

    #[error("Unexpected structure in {path}: {details}")]
    UnexpectedStructure { path: String, details: String },
}

/// ManifestParser service for turning manifest text into declared dependencies
///
/// Pure functions: no I/O, no logging. Each parser only looks at its own file.
pub struct ManifestParser;

impl ManifestParser {
    /// Dispatches to the parser for `kind`.
    pub fn parse(
        kind: ManifestKind,
        content: &str,
        source_file: &Path,
    ) -> Result<Vec<DeclaredDependency>, ManifestError> {
        match kind {
            ManifestKind::Requirements => Ok(Self::parse_requirements(content, source_file)),
            ManifestKind::PackageJson => Self::parse_package_json(content, source_file),
            ManifestKind::PackageLock => Self::parse_package_lock(content, source_file),
        }
    }

    /// Parses pinned pip requirements.
    ///
    /// Lines end at LF, CRLF or a lone CR. Only lines containing `==` count.
    /// The line is trimmed as a whole and
    /// split at the first `==`, so `a==1==2` yields name `a`, version `1==2`.
    /// Neither half is trimmed again and comments are not stripped: `# a==1`
    /// is reported with the name `# a`. Lines with nothing before the marker
    /// are skipped.
    pub fn parse_requirements(content: &str, source_file: &Path) -> Vec<DeclaredDependency> {
        content
            .split(LINE_BREAKS)
            .filter(|line| line.contains(PIN_MARKER))
            .filter_map(|line| line.trim().split_once(PIN_MARKER))
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, version)| {
                DeclaredDependency::new(name, version, ManifestKind::Requirements, source_file)
            })
            .collect()
    }

    /// Parses the `dependencies` mapping of a package.json.
    ///
    /// An absent mapping declares nothing. Entries whose version specifier is
    /// not a string are skipped.
    pub fn parse_package_json(
        content: &str,
        source_file: &Path,
    ) -> Result<Vec<DeclaredDependency>, ManifestError> {
        let document = parse_document(content, source_file)?;
        let Some(dependencies) = dependencies_of(&document, source_file)? else {
            return Ok(Vec::new());
        };

        Ok(dependencies
            .iter()
            .filter_map(|(name, spec)| {
                spec.as_str().map(|version| {
                    DeclaredDependency::new(
                        name.as_str(),
                        version,
                        ManifestKind::PackageJson,
                        source_file,
                    )
                })
            })
            .collect())
    }

    /// Parses the `dependencies` mapping of a package-lock.json.
    ///
    /// Each entry must be an object carrying a non-empty string `version`;
    /// entries that don't are skipped.
    pub fn parse_package_lock(
        content: &str,
        source_file: &Path,
    ) -> Result<Vec<DeclaredDependency>, ManifestError> {
        let document = parse_document(content, source_file)?;
        let Some(dependencies) = dependencies_of(&document, source_file)? else {
            return Ok(Vec::new());
        };

        Ok(dependencies
            .iter()
            .filter_map(|(name, details)| {
                locked_version(details).map(|version| {
                    DeclaredDependency::new(
                        name.as_str(),
                        version,
                        ManifestKind::PackageLock,
                        source_file,
                    )
                })
            })
            .collect())
    }
}

fn parse_document(content: &str, source_file: &Path) -> Result<Value, ManifestError> {
    serde_json::from_str(content).map_err(|e| ManifestError::InvalidJson {
        path: source_file.display().to_string(),
        details: e.to_string(),
    })
}

/// Returns the `dependencies` object of a manifest document, `None` if absent.
fn dependencies_of<'a>(
    document: &'a Value,
    source_file: &Path,
) -> Result<Option<&'a Map<String, Value>>, ManifestError> {
    let root = document
        .as_object()
        .ok_or_else(|| ManifestError::UnexpectedStructure {
            path: source_file.display().to_string(),
            details: "top-level value is not an object".to_string(),
        })?;

    match root.get("dependencies") {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ManifestError::UnexpectedStructure {
            path: source_file.display().to_string(),
            details: "'dependencies' is not an object".to_string(),
        }),
    }
}

fn locked_version(details: &Value) -> Option<&str> {
    details
        .get("version")
        .and_then(Value::as_str)
        .filter(|version| !version.is_empty())
}
