use anyhow::{Context, Result};
use regex::Regex;

use super::LineStrategy;
use crate::scanner::{LineRecord, MatchReport};

/// Characters of context kept on each side of a match
pub const CONTEXT_CHARS: usize = 10;

/// Reports the first match of a user pattern on each line, with up to
/// [`CONTEXT_CHARS`] characters either side.
#[derive(Debug, Clone)]
pub struct SearchingStrategy {
    regex: Regex,
}

impl SearchingStrategy {
    /// Wrap the raw user pattern with before/after context groups.
    ///
    /// Named groups keep the user's own capture groups from shifting them.
    pub fn new(pattern: &str) -> Result<Self> {
        let wrapped = format!(
            "(?P<before>.{{0,{n}}})(?P<hit>{pattern})(?P<after>.{{0,{n}}})",
            n = CONTEXT_CHARS,
            pattern = pattern
        );
        let regex = Regex::new(&wrapped).with_context(|| format!("Invalid search pattern '{}'", pattern))?;
        Ok(Self { regex })
    }
}

impl LineStrategy for SearchingStrategy {
    fn check_line(&self, record: &LineRecord<'_>) -> Vec<MatchReport> {
        let Some(caps) = self.regex.captures(record.line) else {
            return Vec::new();
        };

        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        let excerpt = format!(
            "{}{}{}",
            group("before").trim_start(),
            group("hit"),
            group("after").trim_end()
        );

        vec![MatchReport::new(record, excerpt)]
    }
}
