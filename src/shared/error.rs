use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Codes 0-4 are the documented contract consumed by batch jobs and CI;
/// they must not be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM written, or repositories found but no dependencies extracted
    Success = 0,
    /// No directory under the root contains requirements.txt or package.json
    NoRepositories = 1,
    /// Processing requirements.txt records failed
    RequirementsFailed = 2,
    /// Processing package.json records failed
    PackageJsonFailed = 3,
    /// Processing package-lock.json records failed
    PackageLockFailed = 4,
    /// Any other failure (configuration, output writing, ...)
    ApplicationError = 5,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the application layer.
    ///
    /// Errors that carry an [`SbomError`] anywhere in their chain map through
    /// [`SbomError::exit_code`]; everything else is an application error.
    pub fn for_error(err: &anyhow::Error) -> Self {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<SbomError>())
            .map(SbomError::exit_code)
            .unwrap_or(ExitCode::ApplicationError)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NoRepositories => write!(f, "No Repositories (1)"),
            ExitCode::RequirementsFailed => write!(f, "Requirements Processing Failed (2)"),
            ExitCode::PackageJsonFailed => write!(f, "package.json Processing Failed (3)"),
            ExitCode::PackageLockFailed => write!(f, "package-lock.json Processing Failed (4)"),
            ExitCode::ApplicationError => write!(f, "Application Error (5)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("No repositories with 'requirements.txt' or 'package.json' found in: {root}\n\n💡 Hint: Point the scanner at a directory that contains pip or npm projects")]
    NoRepositoriesFound { root: PathBuf },

    #[error("Error processing requirements.txt in {repository}\nDetails: {details}")]
    RequirementsProcessing { repository: PathBuf, details: String },

    #[error("Error processing package.json in {repository}\nDetails: {details}")]
    PackageJsonProcessing { repository: PathBuf, details: String },

    #[error("Error processing package-lock.json in {repository}\nDetails: {details}")]
    PackageLockProcessing { repository: PathBuf, details: String },

    #[error("Invalid root directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory to scan")]
    InvalidRootPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl SbomError {
    /// Maps this error onto the documented process exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SbomError::NoRepositoriesFound { .. } | SbomError::InvalidRootPath { .. } => {
                ExitCode::NoRepositories
            }
            SbomError::RequirementsProcessing { .. } => ExitCode::RequirementsFailed,
            SbomError::PackageJsonProcessing { .. } => ExitCode::PackageJsonFailed,
            SbomError::PackageLockProcessing { .. } => ExitCode::PackageLockFailed,
            SbomError::FileReadError { .. }
            | SbomError::FileWriteError { .. }
            | SbomError::Config { .. } => ExitCode::ApplicationError,
        }
    }
}
