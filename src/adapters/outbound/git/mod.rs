/// Version control adapters
mod git_cli;

pub use git_cli::GitRevisionResolver;
