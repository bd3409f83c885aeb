use crate::ports::outbound::RevisionResolver;
use crate::sbom_generation::domain::Revision;
use crate::shared::Result;
use std::path::Path;
use std::process::Command;

/// GitRevisionResolver adapter that asks the `git` executable for the
/// most recent commit of a working tree.
///
/// Runs `git -C <repository> log --format=%H -n 1`. Git itself walks up to
/// the enclosing repository, so a nested project directory resolves to the
/// revision of the repository that contains it.
pub struct GitRevisionResolver {
    program: String,
}

impl GitRevisionResolver {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Uses a different executable in place of `git`
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitRevisionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RevisionResolver for GitRevisionResolver {
    fn resolve_revision(&self, repository_path: &Path) -> Result<Revision> {
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(repository_path)
            .args(["log", "--format=%H", "-n", "1"])
            .output()
            .map_err(|e| anyhow::anyhow!("Failed to run {}: {}", self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git log failed: {}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let hash = stdout.trim();
        if hash.is_empty() {
            anyhow::bail!("git log returned no commit");
        }

        tracing::debug!(
            repository = %repository_path.display(),
            revision = hash,
            "Resolved revision"
        );
        Revision::new(hash.to_string())
    }
}
