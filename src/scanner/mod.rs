//! Source tree traversal
//!
//! [`TreeWalker`] walks the configured roots, [`PathFilter`] decides which
//! directories and files take part, and every line of an inspected file is
//! handed to a [`crate::strategy::LineStrategy`] as a [`LineRecord`].

pub mod filter;
pub mod types;
pub mod walker;

pub use filter::PathFilter;
pub use types::{LineRecord, MatchReport, ScanStats};
pub use walker::TreeWalker;
