//! repo-sbom - dependency inventory across many repositories
//!
//! This library walks a directory tree, finds every pip or npm repository in
//! it (a directory holding `requirements.txt` or `package.json`), and
//! collects one record per declared dependency, tagged with ecosystem,
//! direct/indirect relationship, source manifest and the repository's git
//! revision. The records are written as a CSV and a JSON SBOM.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use repo_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let discoverer = FileSystemDiscoverer::new(DirectoryFilter::default());
//! let reader = FileSystemReader::new();
//! let resolver = GitRevisionResolver::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateSbomUseCase::new(discoverer, reader, resolver, progress_reporter);
//!
//! // Execute
//! let response = use_case.execute(SbomRequest::new(PathBuf::from("./workspace")))?;
//!
//! // Format output
//! let model = SbomReadModelBuilder::build(&response.records);
//! let output = FormatterFactory::create(OutputFormat::Csv).format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDiscoverer, FileSystemReader, FileSystemWriter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter};
    pub use crate::adapters::outbound::git::GitRevisionResolver;
    pub use crate::application::dto::{OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{SbomEntryView, SbomReadModel, SbomReadModelBuilder};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        ManifestReader, OutputPresenter, ProgressReporter, RepositoryDiscoverer,
        RevisionResolver, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        DependencyRecord, Ecosystem, ManifestKind, Relationship, RepositoryCandidate, Revision,
    };
    pub use crate::sbom_generation::services::{DirectoryFilter, ManifestParser};
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::Result;
}
