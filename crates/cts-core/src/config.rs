//! Configuration types for ctsearch.
//!
//! [`Config::load`] layers, lowest priority first: the built-in defaults,
//! the config file (an explicit path, or `~/.config/ctsearch/config.toml`
//! when present), and `CTSEARCH__SECTION__KEY` environment variables.
//! [`Config::defaults`] returns the built-in defaults without touching the
//! filesystem or the environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:5000"
cors = true

[data]
path = "clinical_trials.csv"

[search]
default_mode = "expand"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    /// Extra synonym groups, layered over the built-in table.
    #[serde(default)]
    pub synonyms: Vec<SynonymEntry>,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Send permissive cross-origin headers so a browser front end on
    /// another port can call `/search`.
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_bind() -> String { "127.0.0.1:5000".to_string() }
fn default_cors() -> bool { true }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors: default_cors(),
        }
    }
}

/// `[data]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf { PathBuf::from("clinical_trials.csv") }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Mode used when a request does not name one: `"expand"` or `"terms"`.
    #[serde(default = "default_mode")]
    pub default_mode: String,
}

fn default_mode() -> String { "expand".to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
        }
    }
}

/// One `[[synonyms]]` entry: a canonical concept and its members.
///
/// ```toml
/// [[synonyms]]
/// concept = "headache"
/// members = ["cephalalgia", "head pain"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SynonymEntry {
    pub concept: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration. An explicit `path` must exist; the default
    /// location is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("CTSEARCH")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ctsearch")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
