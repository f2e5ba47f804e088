use anyhow::{Context, Result};
use regex::Regex;

/// Detects TODO lines and pulls the message out of the comment around it.
#[derive(Debug, Clone)]
pub struct TodoExtractor {
    marker: Regex,
    start: Regex,
    end: Regex,
}

impl TodoExtractor {
    pub fn new(start_pattern: &str, end_pattern: &str) -> Result<Self> {
        Ok(Self {
            marker: Regex::new("(?i)TODO").context("Failed to compile TODO marker")?,
            start: Regex::new(start_pattern)
                .with_context(|| format!("Invalid TODO start pattern '{}'", start_pattern))?,
            end: Regex::new(end_pattern)
                .with_context(|| format!("Invalid TODO end pattern '{}'", end_pattern))?,
        })
    }

    /// The TODO message of `line`, if it mentions TODO in any case
    pub fn extract(&self, line: &str) -> Option<String> {
        self.marker.is_match(line).then(|| self.strip(line))
    }

    /// Drop the first start marker and a trailing end marker, then trim.
    ///
    /// Text without markers comes back trimmed but otherwise unchanged.
    pub fn strip(&self, text: &str) -> String {
        let text = self.start.replace(text.trim(), "");
        let text = self.end.replace(&text, "");
        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinderConfig;

    fn extractor(profile: &str) -> TodoExtractor {
        let config = FinderConfig::defaults(profile).unwrap();
        TodoExtractor::new(&config.todo_start_pattern, &config.todo_end_pattern).unwrap()
    }

    #[test]
    fn test_line_comment() {
        let todo = extractor("default");
        assert_eq!(todo.extract("// TODO - fix this").as_deref(), Some("fix this"));
        assert_eq!(todo.extract("    //TODO:handle EOF").as_deref(), Some("handle EOF"));
        assert_eq!(todo.extract("// todo : lower case").as_deref(), Some("lower case"));
    }

    #[test]
    fn test_block_comment() {
        let todo = extractor("default");
        assert_eq!(
            todo.extract("  /* TODO - free the page */  ").as_deref(),
            Some("free the page")
        );
        assert_eq!(todo.extract("/*TODO: check*/").as_deref(), Some("check"));
    }

    #[test]
    fn test_marker_after_code() {
        let todo = extractor("default");
        assert_eq!(
            todo.extract("lock_acquire (&l); // TODO - use a semaphore").as_deref(),
            Some("lock_acquire (&l); use a semaphore")
        );
    }

    #[test]
    fn test_todo_without_marker_is_kept_whole() {
        let todo = extractor("default");
        assert_eq!(todo.extract("  Todo list for phase 2  ").as_deref(), Some("Todo list for phase 2"));
        assert_eq!(todo.extract("// TODO fix me").as_deref(), Some("// TODO fix me"));
    }

    #[test]
    fn test_lines_without_todo() {
        let todo = extractor("default");
        assert_eq!(todo.extract("int x = 0;"), None);
        assert_eq!(todo.extract("// FIXME - later"), None);
        assert_eq!(todo.extract(""), None);
    }

    #[test]
    fn test_legacy_accepts_only_dash_separator() {
        let todo = extractor("legacy");
        assert_eq!(todo.extract("// TODO - dash").as_deref(), Some("dash"));
        assert_eq!(todo.extract("// TODO: colon").as_deref(), Some("// TODO: colon"));
    }

    #[test]
    fn test_strip_is_idempotent() {
        let todo = extractor("default");
        for line in [
            "// TODO - fix this",
            "/* TODO: free the page */",
            "x = 1; // todo - later",
            "todo",
        ] {
            let once = todo.strip(line);
            assert_eq!(todo.strip(&once), once, "line: {line}");
        }
    }

    #[test]
    fn test_invalid_start_pattern() {
        assert!(TodoExtractor::new("(", r"\*/$").is_err());
    }
}
