use anyhow::{Context, Result, bail};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::Blame;

lazy_static! {
    /// `(<author> <padding>YYYY-MM-DD` in a `git blame` annotation
    static ref AUTHOR_PATTERN: Regex =
        Regex::new(r"\((.*?)\s+\d{4}-\d{2}-\d{2}").expect("author pattern is valid");
}

/// Blame through the `git` executable on `PATH`
#[derive(Debug, Clone)]
pub struct GitCommandBlame {
    workdir: PathBuf,
}

impl GitCommandBlame {
    /// Blame paths relative to `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self { workdir: workdir.into() }
    }
}

impl Blame for GitCommandBlame {
    fn attribute(&self, path: &Path, line_no: usize) -> Result<String> {
        let git = which::which("git").context("git executable not found on PATH")?;
        tracing::trace!("git blame -L {},+1 {}", line_no, path.display());

        let output = Command::new(git)
            .current_dir(&self.workdir)
            .arg("blame")
            .arg("-L")
            .arg(format!("{},+1", line_no))
            .arg("--")
            .arg(path)
            .output()
            .context("Failed to run git blame")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git blame failed for {}:{}: {}", path.display(), line_no, stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_blame_author(&stdout)
            .with_context(|| format!("No author annotation in git blame output for {}:{}", path.display(), line_no))
    }
}

/// Pull the author out of one line of default-format `git blame` output
pub fn parse_blame_author(output: &str) -> Option<String> {
    AUTHOR_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|author| author.as_str().trim().to_string())
}
