//! Per-line check strategies
//!
//! The walker hands every line of every inspected file to exactly one
//! [`LineStrategy`], chosen at startup: [`AnalyzingStrategy`] for TODO and
//! line-length reports, or [`SearchingStrategy`] for a user supplied regex.

pub mod analyzing;
pub mod searching;
pub mod todo;

pub use analyzing::AnalyzingStrategy;
pub use searching::SearchingStrategy;
pub use todo::TodoExtractor;

use crate::scanner::{LineRecord, MatchReport};

/// Inspect one line and produce zero or more reports for it
pub trait LineStrategy {
    fn check_line(&self, record: &LineRecord<'_>) -> Vec<MatchReport>;
}
