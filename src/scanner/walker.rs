use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use ignore::{DirEntry, WalkBuilder};

use super::filter::PathFilter;
use super::types::{LineRecord, ScanStats};
use crate::config::FinderConfig;
use crate::strategy::LineStrategy;

/// Depth-first traversal of the scan roots, feeding every line of every
/// inspected file to a strategy.
///
/// Entries come back in whatever order the filesystem yields them. Reports
/// are written to the output as soon as their line has been checked, so a
/// file's reports always appear in line order.
///
/// Unreadable roots, directories and files are logged and skipped; only a
/// failing output sink aborts the walk.
#[derive(Debug)]
pub struct TreeWalker {
    base: PathBuf,
    roots: Vec<String>,
    filter: Arc<PathFilter>,
    follow_symlinks: bool,
}

impl TreeWalker {
    pub fn new(base: impl Into<PathBuf>, roots: Vec<String>, filter: PathFilter) -> Self {
        Self {
            base: base.into(),
            roots,
            filter: Arc::new(filter),
            follow_symlinks: true,
        }
    }

    pub fn from_config(base: impl Into<PathBuf>, config: &FinderConfig) -> Result<Self> {
        let filter = PathFilter::from_config(config)?;
        Ok(Self::new(base, config.roots.clone(), filter).follow_symlinks(config.follow_symlinks))
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Walk every root in order and write each report as a line to `out`
    pub fn walk<W: Write + ?Sized>(&self, strategy: &dyn LineStrategy, out: &mut W) -> Result<ScanStats> {
        let mut stats = ScanStats::default();

        for root in &self.roots {
            self.walk_root(root, strategy, out, &mut stats)?;
        }

        out.flush().context("Failed to flush report output")?;
        Ok(stats)
    }

    fn walk_root<W: Write + ?Sized>(
        &self,
        root: &str,
        strategy: &dyn LineStrategy,
        out: &mut W,
        stats: &mut ScanStats,
    ) -> Result<()> {
        let root_path = self.base.join(root);
        tracing::debug!("Scanning root {}", root_path.display());

        let filter = Arc::clone(&self.filter);
        let walker = WalkBuilder::new(&root_path)
            .standard_filters(false)
            .follow_links(self.follow_symlinks)
            .filter_entry(move |entry| {
                if !is_dir(entry) {
                    return true;
                }
                let descend = filter.should_descend(&entry.file_name().to_string_lossy());
                if !descend {
                    tracing::debug!("Skipping directory {}", entry.path().display());
                }
                descend
            })
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    stats.walk_errors += 1;
                    continue;
                }
            };

            if is_dir(&entry) {
                stats.dirs_visited += 1;
                continue;
            }

            if self.filter.should_inspect(&entry.file_name().to_string_lossy()) {
                self.check_file(entry.path(), strategy, out, stats)?;
            }
        }

        Ok(())
    }

    fn check_file<W: Write + ?Sized>(
        &self,
        path: &Path,
        strategy: &dyn LineStrategy,
        out: &mut W,
        stats: &mut ScanStats,
    ) -> Result<()> {
        let shown = path.strip_prefix(&self.base).unwrap_or(path);

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", shown.display(), e);
                stats.files_skipped += 1;
                return Ok(());
            }
        };
        tracing::debug!("Checking {}", shown.display());

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Skipping rest of {} at line {}: {}", shown.display(), line_no, e);
                    stats.files_skipped += 1;
                    return Ok(());
                }
            };

            let record = LineRecord {
                path: shown,
                line_no,
                line: &line,
            };
            stats.lines_checked += 1;

            for report in strategy.check_line(&record) {
                writeln!(out, "{}", report).context("Failed to write report")?;
                stats.reports += 1;
            }
        }

        stats.files_scanned += 1;
        Ok(())
    }
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}
