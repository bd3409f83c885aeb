use repo_sbom::adapters::outbound::console::StderrProgressReporter;
use repo_sbom::adapters::outbound::filesystem::{
    FileSystemDiscoverer, FileSystemReader, FileSystemWriter,
};
use repo_sbom::adapters::outbound::git::GitRevisionResolver;
use repo_sbom::application::dto::{OutputFormat, SbomRequest};
use repo_sbom::application::factories::FormatterFactory;
use repo_sbom::application::read_models::SbomReadModelBuilder;
use repo_sbom::application::use_cases::GenerateSbomUseCase;
use repo_sbom::cli::Args;
use repo_sbom::config::{self, ConfigFile};
use repo_sbom::logging;
use repo_sbom::ports::outbound::OutputPresenter;
use repo_sbom::sbom_generation::services::DirectoryFilter;
use repo_sbom::shared::error::{ExitCode, SbomError};
use repo_sbom::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = logging::init(args.log_format) {
        eprintln!("⚠️  Warning: {}", e);
    }

    if let Err(e) = run(args) {
        let exit_code = ExitCode::for_error(&e);
        tracing::error!(exit_code = exit_code.as_i32(), "❌ {}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            tracing::error!("Caused by: {}", cause);
        }

        process::exit(exit_code.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let root = args.directory;
    validate_root_path(&root)?;

    let config = load_config(args.config.as_deref(), &root)?;
    let filter = DirectoryFilter::new(config.merged_excludes(&args.exclude))?;
    if !filter.is_empty() {
        tracing::debug!(
            patterns = ?filter.patterns().collect::<Vec<_>>(),
            "Excluding directories"
        );
    }

    // Create adapters (Dependency Injection)
    let use_case = GenerateSbomUseCase::new(
        FileSystemDiscoverer::new(filter),
        FileSystemReader::new(),
        GitRevisionResolver::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(SbomRequest::new(root.clone()))?;

    if response.is_empty() {
        tracing::info!(
            "No dependencies found in the repositories under {}.",
            root.display()
        );
        return Ok(());
    }

    let model = SbomReadModelBuilder::build(&response.records);
    for format in OutputFormat::ALL {
        tracing::info!("{}", FormatterFactory::progress_message(format));
        let formatted_output = FormatterFactory::create(format).format(&model)?;

        let output_path = root.join(format.file_name());
        FileSystemWriter::new(output_path.clone()).present(&formatted_output)?;
        tracing::info!(
            "Saved SBOM in {} format to {}",
            format,
            output_path.display()
        );
    }

    Ok(())
}

/// Uses the explicit config file when given, otherwise looks for one in the
/// scanned directory.
fn load_config(explicit: Option<&Path>, root: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(root)?.unwrap_or_default()),
    }
}

fn validate_root_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidRootPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidRootPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
