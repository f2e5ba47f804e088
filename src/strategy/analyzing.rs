use anyhow::{Context, Result};
use regex::Regex;

use super::LineStrategy;
use super::todo::TodoExtractor;
use crate::config::FinderConfig;
use crate::git::Blame;
use crate::scanner::{LineRecord, MatchReport};

/// Reported when blame cannot name anyone
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Reports TODO comments and lines over the length limit, naming who to
/// blame for the latter.
///
/// Blame only runs for lines that are actually too long. A failed blame is
/// logged and the line is still reported, against [`UNKNOWN_AUTHOR`].
pub struct AnalyzingStrategy {
    todo: TodoExtractor,
    max_line_length: usize,
    ignored_authors: Vec<Regex>,
    blame: Box<dyn Blame>,
}

impl AnalyzingStrategy {
    pub fn new(config: &FinderConfig, blame: Box<dyn Blame>) -> Result<Self> {
        let ignored_authors: Vec<Regex> = config
            .ignored_authors
            .iter()
            .map(|author| Regex::new(author).with_context(|| format!("Invalid ignored author pattern '{}'", author)))
            .collect::<Result<_>>()?;

        Ok(Self {
            todo: TodoExtractor::new(&config.todo_start_pattern, &config.todo_end_pattern)?,
            max_line_length: config.max_line_length,
            ignored_authors,
            blame,
        })
    }

    fn villain(&self, record: &LineRecord<'_>) -> String {
        match self.blame.attribute(record.path, record.line_no) {
            Ok(author) => author,
            Err(e) => {
                tracing::warn!("Blame failed for {}:{}: {:#}", record.path.display(), record.line_no, e);
                UNKNOWN_AUTHOR.to_string()
            }
        }
    }

    fn is_ignored(&self, author: &str) -> bool {
        self.ignored_authors.iter().any(|pattern| pattern.is_match(author))
    }
}

impl LineStrategy for AnalyzingStrategy {
    fn check_line(&self, record: &LineRecord<'_>) -> Vec<MatchReport> {
        let mut reports = Vec::new();

        if let Some(message) = self.todo.extract(record.line) {
            reports.push(MatchReport::new(record, format!("TODO - {}", message)));
        }

        let length = record.line.chars().count();
        if length > self.max_line_length {
            let author = self.villain(record);
            if self.is_ignored(&author) {
                tracing::debug!(
                    "Not reporting {}:{}, blamed on ignored author {}",
                    record.path.display(),
                    record.line_no,
                    author
                );
            } else {
                reports.push(MatchReport::new(
                    record,
                    format!("is too long ({} chars), blame {}", length, author),
                ));
            }
        }

        reports
    }
}
