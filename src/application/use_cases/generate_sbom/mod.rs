use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{
    ManifestReader, ProgressReporter, RepositoryDiscoverer, RevisionResolver,
};
use crate::sbom_generation::domain::{
    DeclaredDependency, DependencyRecord, ManifestKind, RepositoryCandidate, Revision,
};
use crate::sbom_generation::services::ManifestParser;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Discovers repositories, resolves each repository's revision once, parses
/// its manifests and collects every dependency record in discovery order.
/// Everything recoverable is reported as a warning; only the failures with a
/// dedicated exit code abort the scan.
///
/// # Type Parameters
/// * `RD` - RepositoryDiscoverer implementation
/// * `MR` - ManifestReader implementation
/// * `RR` - RevisionResolver implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<RD, MR, RR, PR> {
    repository_discoverer: RD,
    manifest_reader: MR,
    revision_resolver: RR,
    progress_reporter: PR,
}

impl<RD, MR, RR, PR> GenerateSbomUseCase<RD, MR, RR, PR>
where
    RD: RepositoryDiscoverer,
    MR: ManifestReader,
    RR: RevisionResolver,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        repository_discoverer: RD,
        manifest_reader: MR,
        revision_resolver: RR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            repository_discoverer,
            manifest_reader,
            revision_resolver,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Returns
    /// SbomResponse with every record found. An empty response means
    /// repositories were found but declared no dependencies.
    ///
    /// # Errors
    /// - [`SbomError::NoRepositoriesFound`] when discovery finds nothing
    /// - [`SbomError::RequirementsProcessing`], [`SbomError::PackageJsonProcessing`]
    ///   or [`SbomError::PackageLockProcessing`] when parsed dependencies cannot
    ///   be turned into records
    /// - any error of the discoverer itself
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        let root = &request.root_directory;

        self.progress_reporter.report(&format!(
            "🔍 Searching for repositories in: {}",
            root.display()
        ));

        let repositories = self.repository_discoverer.discover(root)?;

        self.progress_reporter.report(&format!(
            "Found {} repositorie(s) in '{}'",
            repositories.len(),
            root.display()
        ));

        if repositories.is_empty() {
            return Err(SbomError::NoRepositoriesFound { root: root.clone() }.into());
        }

        let total = repositories.len();
        let mut records = Vec::new();

        for (idx, repository) in repositories.iter().enumerate() {
            let label = repository.path().display().to_string();
            self.progress_reporter.report_progress(idx + 1, total, Some(&label));

            let revision = self.resolve_revision(repository);

            for &kind in repository.manifests() {
                let declared = self.read_declared(repository, kind);
                records.extend(into_records(repository.path(), kind, declared, &revision)?);
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Collected {} dependency record(s) from {} repositorie(s)",
            records.len(),
            total
        ));

        Ok(SbomResponse::new(records, total))
    }

    /// Resolves the revision once per repository, warning when it is absent
    fn resolve_revision(&self, repository: &RepositoryCandidate) -> Option<Revision> {
        match self.revision_resolver.resolve_revision(repository.path()) {
            Ok(revision) => Some(revision),
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: No Git commit found for {}. Proceeding without commit information. ({:#})",
                    repository.path().display(),
                    e
                ));
                None
            }
        }
    }

    /// Reads and parses one manifest; unreadable or malformed files declare nothing
    fn read_declared(
        &self,
        repository: &RepositoryCandidate,
        kind: ManifestKind,
    ) -> Vec<DeclaredDependency> {
        let manifest_path = repository.manifest_path(kind);

        let content = match self.manifest_reader.read_manifest(&manifest_path) {
            Ok(content) => content,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Error reading {}: {:#}",
                    manifest_path.display(),
                    e
                ));
                return Vec::new();
            }
        };

        match ManifestParser::parse(kind, &content, &manifest_path) {
            Ok(declared) => declared,
            Err(e) => {
                self.progress_reporter.report_error(&format!("⚠️  Warning: {}", e));
                Vec::new()
            }
        }
    }
}

/// Attaches the repository revision to each declared dependency.
///
/// A dependency that cannot become a record aborts the scan with the error
/// dedicated to its manifest kind.
fn into_records(
    repository: &Path,
    kind: ManifestKind,
    declared: Vec<DeclaredDependency>,
    revision: &Option<Revision>,
) -> Result<Vec<DependencyRecord>> {
    declared
        .into_iter()
        .map(|dependency| DependencyRecord::from_declared(dependency, revision.clone()))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| processing_error(kind, repository, format!("{:#}", e)).into())
}

fn processing_error(kind: ManifestKind, repository: &Path, details: String) -> SbomError {
    let repository = repository.to_path_buf();
    match kind {
        ManifestKind::Requirements => SbomError::RequirementsProcessing {
            repository,
            details,
        },
        ManifestKind::PackageJson => SbomError::PackageJsonProcessing {
            repository,
            details,
        },
        ManifestKind::PackageLock => SbomError::PackageLockProcessing {
            repository,
            details,
        },
    }
}
