use std::path::PathBuf;

/// SbomRequest - Explicit configuration of one scan
///
/// Everything the use case needs to know about the run; nothing is read
/// from the process working directory or arguments.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Directory whose tree is searched for repositories
    pub root_directory: PathBuf,
}

impl SbomRequest {
    pub fn new(root_directory: PathBuf) -> Self {
        Self { root_directory }
    }
}
