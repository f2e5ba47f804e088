//! Configuration management for todo-finder
//!
//! Settings come from an embedded TOML document with one figment profile per
//! tree layout, overridden by `TODO_FINDER_` environment variables and then by
//! command-line flags. Nothing is read from disk.

use anyhow::{Context, Result, bail, ensure};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Prefix for environment overrides, `__` separates nested keys
pub const ENV_PREFIX: &str = "TODO_FINDER_";

/// Which blame implementation attributes long lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BlameBackend {
    /// Spawn `git blame` and parse its output
    Command,
    /// Blame in-process through libgit2
    Libgit2,
}

/// Main configuration structure for a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Root directories, scanned in this order
    pub roots: Vec<String>,

    /// Directory names matching any of these are not descended into
    pub ignored_dirs: Vec<String>,

    /// File names matching any of these are inspected
    pub file_patterns: Vec<String>,

    /// Lines longer than this many characters are reported
    pub max_line_length: usize,

    /// Marker stripped from the front of a TODO message
    pub todo_start_pattern: String,

    /// Marker stripped from the end of a TODO message
    pub todo_end_pattern: String,

    /// Long lines blamed on a matching author are not reported
    #[serde(default)]
    pub ignored_authors: Vec<String>,

    pub blame: BlameBackend,

    #[serde(default)]
    pub follow_symlinks: bool,
}

/// Values supplied on the command line, applied over every profile
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roots: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blame: Option<BlameBackend>,
}

impl FinderConfig {
    /// Load a profile with environment and CLI overrides applied
    pub fn load(profile: &str, overrides: Option<ConfigOverrides>) -> Result<Self> {
        let mut figment = Self::embedded(profile).merge(Env::prefixed(ENV_PREFIX).split("__").global());

        if let Some(overrides) = overrides {
            tracing::trace!("Applying CLI overrides: {:?}", overrides);
            figment = figment.merge(Serialized::globals(overrides));
        }

        Self::extract(&figment, profile)
    }

    /// Load a profile exactly as embedded, ignoring the environment
    pub fn defaults(profile: &str) -> Result<Self> {
        Self::extract(&Self::embedded(profile), profile)
    }

    fn embedded(profile: &str) -> Figment {
        Figment::from(Toml::string(DEFAULT_CONFIG).nested()).select(profile)
    }

    fn extract(figment: &Figment, profile: &str) -> Result<Self> {
        let known = figment
            .profiles()
            .any(|p| p.as_str().as_str().eq_ignore_ascii_case(profile));
        if !known {
            bail!("Unknown configuration profile '{}'", profile);
        }

        let config: Self = figment
            .extract()
            .with_context(|| format!("Failed to load configuration profile '{}'", profile))?;
        config.validate()?;

        tracing::debug!("Loaded profile '{}': roots {:?}", profile, config.roots);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.roots.is_empty(), "At least one scan root is required");
        ensure!(self.max_line_length > 0, "max_line_length must be positive");
        Ok(())
    }
}
