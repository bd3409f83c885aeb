use super::{ManifestKind, Revision};
use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Maximum length for dependency names (security limit)
const MAX_DEPENDENCY_NAME_LENGTH: usize = 255;

/// Maximum length for version tokens (security limit)
///
/// npm versions may be URLs or git specifiers, hence the generous bound.
const MAX_VERSION_LENGTH: usize = 1024;

/// Package ecosystem a dependency comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Pip,
    Npm,
}

impl Ecosystem {
    pub fn as_str(self) -> &'static str {
        match self {
            Ecosystem::Pip => "pip",
            Ecosystem::Npm => "npm",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a dependency is declared directly or only locked transitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    Direct,
    Indirect,
}

impl Relationship {
    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Direct => "direct",
            Relationship::Indirect => "indirect",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// NewType wrapper for dependency name with validation
///
/// No character whitelist: names are reported exactly as the manifest spells
/// them (`@scope/pkg`, `pkg[extra]`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyName(String);

impl DependencyName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Dependency name cannot be empty");
        }

        if name.len() > MAX_DEPENDENCY_NAME_LENGTH {
            anyhow::bail!(
                "Dependency name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_DEPENDENCY_NAME_LENGTH
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DependencyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for an ecosystem-specific version token
///
/// Versions are not interpreted. An empty token is kept (`pkg==` pins nothing,
/// but the line is still reported).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyVersion(String);

impl DependencyVersion {
    pub fn new(version: String) -> Result<Self> {
        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Dependency version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DependencyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dependency exactly as one manifest declared it.
///
/// Produced by the manifest parsers; the repository revision is attached
/// later when it becomes a [`DependencyRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredDependency {
    pub name: String,
    pub version: String,
    pub kind: ManifestKind,
    pub source_file: PathBuf,
}

impl DeclaredDependency {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        kind: ManifestKind,
        source_file: &Path,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind,
            source_file: source_file.to_path_buf(),
        }
    }
}

/// One row of the SBOM: a declared dependency plus its repository's revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    name: DependencyName,
    version: DependencyVersion,
    ecosystem: Ecosystem,
    relationship: Relationship,
    source_file: PathBuf,
    revision: Option<Revision>,
}

impl DependencyRecord {
    /// Validates a declared dependency and attaches the repository revision.
    ///
    /// # Errors
    /// Returns an error if the name or version breaks the length limits, or if
    /// the source file is not named after the manifest kind that produced it.
    pub fn from_declared(declared: DeclaredDependency, revision: Option<Revision>) -> Result<Self> {
        let file_name = declared
            .source_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if file_name != declared.kind.file_name() {
            anyhow::bail!(
                "Dependency '{}' was attributed to {} but declared in {}",
                declared.name,
                declared.kind,
                declared.source_file.display()
            );
        }

        Ok(Self {
            name: DependencyName::new(declared.name)?,
            version: DependencyVersion::new(declared.version)?,
            ecosystem: declared.kind.ecosystem(),
            relationship: declared.kind.relationship(),
            source_file: declared.source_file,
            revision,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    pub fn revision(&self) -> Option<&Revision> {
        self.revision.as_ref()
    }
}
