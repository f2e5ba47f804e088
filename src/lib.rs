//! # todo-finder
//!
//! Walks a fixed set of source directories and checks every line of every
//! C source, header and design document it finds.
//!
//! Without arguments it reports TODO comments and lines longer than the
//! configured limit, blaming each long line on its last author through git.
//! Given a pattern it reports the first match on each line instead, with a
//! little context either side.
//!
//! ```bash
//! # TODOs and long lines under devices/, lib/, threads/ and userprog/
//! todo-finder
//!
//! # Every line mentioning sema_down, scanning an older tree layout
//! todo-finder --profile legacy 'sema_down'
//! ```

pub mod cli;
pub mod config;
pub mod git;
pub mod scanner;
pub mod strategy;

pub use cli::Cli;
pub use config::FinderConfig;

/// Result type alias for todo-finder operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
