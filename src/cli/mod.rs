//! Command-line interface for todo-finder
//!
//! A single optional positional argument picks the strategy: none runs the
//! TODO and line-length analysis, a pattern runs a search.

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{BlameBackend, ConfigOverrides, FinderConfig};
use crate::git;
use crate::scanner::TreeWalker;
use crate::strategy::{AnalyzingStrategy, LineStrategy, SearchingStrategy};

/// Report TODO comments and overlong lines in a source tree, or search it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Search for this regex instead of reporting TODOs and long lines
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Directory the scan roots are resolved against
    #[arg(short = 'C', long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Configuration profile (default, legacy)
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    pub profile: String,

    /// Scan these roots instead of the profile's (repeatable)
    #[arg(short = 'r', long = "root", value_name = "ROOT")]
    pub roots: Vec<String>,

    /// How long lines are attributed to an author
    #[arg(long, value_enum)]
    pub blame: Option<BlameBackend>,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all diagnostics
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Execute the scan, writing reports to stdout
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let overrides = ConfigOverrides {
            roots: (!self.roots.is_empty()).then(|| self.roots.clone()),
            blame: self.blame,
        };
        let config = FinderConfig::load(&self.profile, Some(overrides))?;

        let strategy: Box<dyn LineStrategy> = match &self.pattern {
            Some(pattern) => Box::new(SearchingStrategy::new(pattern)?),
            None => {
                let blame = git::open_backend(config.blame, &self.dir)?;
                Box::new(AnalyzingStrategy::new(&config, blame)?)
            }
        };

        let walker = TreeWalker::from_config(&self.dir, &config)?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let stats = walker.walk(strategy.as_ref(), &mut out)?;
        out.flush()?;

        tracing::info!(
            "Scanned {} files ({} lines) in {} directories: {} reports, {} files skipped, {} walk errors",
            stats.files_scanned,
            stats.lines_checked,
            stats.dirs_visited,
            stats.reports,
            stats.files_skipped,
            stats.walk_errors
        );
        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info,ignore=warn"),
        2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
