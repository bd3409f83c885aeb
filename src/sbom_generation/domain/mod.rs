pub mod dependency;
pub mod manifest;
pub mod repository;
pub mod revision;

pub use dependency::{
    DeclaredDependency, DependencyName, DependencyRecord, DependencyVersion, Ecosystem,
    Relationship,
};
pub use manifest::ManifestKind;
pub use repository::RepositoryCandidate;
pub use revision::Revision;
