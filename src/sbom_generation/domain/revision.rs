use crate::shared::Result;
use std::fmt;

/// NewType wrapper for a source-control revision (a full commit hash).
///
/// Shared by every record of one repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn new(revision: String) -> Result<Self> {
        let trimmed = revision.trim();
        if trimmed.is_empty() {
            anyhow::bail!("Revision cannot be empty");
        }
        if trimmed.chars().any(char::is_whitespace) {
            anyhow::bail!("Revision must be a single token, got '{}'", trimmed);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
