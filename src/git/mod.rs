//! Git integration for todo-finder
//!
//! Long lines are attributed to an author through [`Blame`]. Two backends
//! exist: [`GitCommandBlame`] shells out to `git blame` and scrapes its
//! output, [`Git2Blame`] asks libgit2 directly.

use anyhow::Result;
use std::path::Path;

use crate::config::BlameBackend;

mod command;
mod repo;

pub use command::{GitCommandBlame, parse_blame_author};
pub use repo::Git2Blame;

/// Name the author who last touched one line of a file
pub trait Blame {
    /// `path` is relative to the scan base directory, `line_no` is 1-based
    fn attribute(&self, path: &Path, line_no: usize) -> Result<String>;
}

/// Build the configured backend for a scan rooted at `base`
pub fn open_backend(backend: BlameBackend, base: &Path) -> Result<Box<dyn Blame>> {
    Ok(match backend {
        BlameBackend::Command => Box::new(GitCommandBlame::new(base)),
        BlameBackend::Libgit2 => Box::new(Git2Blame::discover(base)?),
    })
}
