use super::{Ecosystem, Relationship};
use std::fmt;

/// The manifest files the scanner understands.
///
/// The kind alone decides a record's ecosystem and relationship, so the
/// pip => direct and lock => indirect rules cannot be broken by a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// `requirements.txt` (pinned pip requirements)
    Requirements,
    /// `package.json` (npm direct dependencies)
    PackageJson,
    /// `package-lock.json` (npm locked dependencies)
    PackageLock,
}

impl ManifestKind {
    /// All kinds, in the order they are processed for one repository.
    pub const ALL: [ManifestKind; 3] = [
        ManifestKind::Requirements,
        ManifestKind::PackageJson,
        ManifestKind::PackageLock,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ManifestKind::Requirements => "requirements.txt",
            ManifestKind::PackageJson => "package.json",
            ManifestKind::PackageLock => "package-lock.json",
        }
    }

    pub fn ecosystem(self) -> Ecosystem {
        match self {
            ManifestKind::Requirements => Ecosystem::Pip,
            ManifestKind::PackageJson | ManifestKind::PackageLock => Ecosystem::Npm,
        }
    }

    pub fn relationship(self) -> Relationship {
        match self {
            ManifestKind::Requirements | ManifestKind::PackageJson => Relationship::Direct,
            ManifestKind::PackageLock => Relationship::Indirect,
        }
    }

    /// Whether the presence of this file makes its directory a repository.
    /// A lone package-lock.json does not.
    pub fn is_marker(self) -> bool {
        !matches!(self, ManifestKind::PackageLock)
    }

    /// Looks up the kind for a bare file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.file_name() == name)
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
