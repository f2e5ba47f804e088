use anyhow::{Context, Result};
use regex::Regex;

use crate::config::FinderConfig;

/// Name-based predicates deciding which directories are walked and which
/// files are read.
///
/// Both pattern sets are unanchored regex searches against the bare entry
/// name, never the full path. With the stock `\.` exclusion any directory
/// whose name contains a dot is skipped, hidden directories included.
#[derive(Debug, Clone)]
pub struct PathFilter {
    ignored_dirs: Vec<Regex>,
    file_patterns: Vec<Regex>,
}

impl PathFilter {
    pub fn new<S: AsRef<str>>(ignored_dirs: &[S], file_patterns: &[S]) -> Result<Self> {
        Ok(Self {
            ignored_dirs: compile(ignored_dirs, "ignored directory")?,
            file_patterns: compile(file_patterns, "file")?,
        })
    }

    pub fn from_config(config: &FinderConfig) -> Result<Self> {
        Self::new(config.ignored_dirs.as_slice(), config.file_patterns.as_slice())
    }

    /// True iff the directory name matches no exclusion pattern
    pub fn should_descend(&self, dir_name: &str) -> bool {
        self.ignored_dirs.iter().all(|pattern| !pattern.is_match(dir_name))
    }

    /// True iff the file name matches any inclusion pattern
    pub fn should_inspect(&self, file_name: &str) -> bool {
        self.file_patterns.iter().any(|pattern| pattern.is_match(file_name))
    }
}

fn compile<S: AsRef<str>>(patterns: &[S], kind: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Regex::new(pattern).with_context(|| format!("Invalid {} pattern '{}'", kind, pattern))
        })
        .collect()
}
