use std::fmt;
use std::path::Path;

/// One physical line handed to a strategy
#[derive(Debug, Clone, Copy)]
pub struct LineRecord<'a> {
    /// Path relative to the scan base, e.g. `lib/foo.c`
    pub path: &'a Path,
    /// 1-based
    pub line_no: usize,
    /// Line content without its terminator
    pub line: &'a str,
}

/// A single finding, printed as `<path>:<line_no> <message>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub path: String,
    pub line_no: usize,
    pub message: String,
}

impl MatchReport {
    pub fn new(record: &LineRecord<'_>, message: impl Into<String>) -> Self {
        Self {
            path: record.path.display().to_string(),
            line_no: record.line_no,
            message: message.into(),
        }
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.path, self.line_no, self.message)
    }
}

/// Statistics from a scanning operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub dirs_visited: usize,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub lines_checked: usize,
    pub reports: usize,
    pub walk_errors: usize,
}
