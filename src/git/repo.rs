use anyhow::{Context, Result};
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

use super::Blame;

/// Author `git blame` shows for lines not yet committed
pub const NOT_COMMITTED: &str = "Not Committed Yet";

/// Blame through libgit2, without spawning processes
pub struct Git2Blame {
    repo: Repository,
    workdir: PathBuf,
    base: PathBuf,
}

impl Git2Blame {
    /// Discover the repository containing `base`
    pub fn discover(base: &Path) -> Result<Self> {
        let repo = Repository::discover(base)
            .with_context(|| format!("No Git repository found at {}", base.display()))?;
        let workdir = repo
            .workdir()
            .context("Repository has no working directory")?
            .canonicalize()
            .context("Failed to resolve repository working directory")?;
        let base = base
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", base.display()))?;

        Ok(Self { repo, workdir, base })
    }
}

impl Blame for Git2Blame {
    fn attribute(&self, path: &Path, line_no: usize) -> Result<String> {
        let full = self.base.join(path);
        let relative = full
            .strip_prefix(&self.workdir)
            .with_context(|| format!("{} is outside the repository", full.display()))?;

        let committed = self
            .repo
            .blame_file(relative, None)
            .with_context(|| format!("Failed to blame {}", relative.display()))?;
        let content = fs::read(&full).with_context(|| format!("Failed to read {}", full.display()))?;
        // Line numbers refer to the file on disk, which may differ from HEAD
        let blame = committed
            .blame_buffer(&content)
            .with_context(|| format!("Failed to blame working copy of {}", relative.display()))?;
        let hunk = blame
            .get_line(line_no)
            .with_context(|| format!("No blame hunk for {}:{}", relative.display(), line_no))?;

        if hunk.final_commit_id().is_zero() {
            return Ok(NOT_COMMITTED.to_string());
        }

        let signature = hunk.final_signature();
        let name = signature
            .name()
            .with_context(|| format!("Author of {}:{} is not valid UTF-8", relative.display(), line_no))?;
        Ok(name.to_string())
    }
}
