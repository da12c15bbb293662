//! Configuration types for folio.
//!
//! [`Config::load`] reads `~/.config/folio/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
theme            = "default"
tools_preview    = 3
date_format      = "%B %-d, %Y"
contact_ack_secs = 3

[catalog]
strict_references = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Theme name: `default` or `gruvbox`.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Tools listed on a project card before collapsing into "+N more".
    #[serde(default = "default_tools_preview")]
    pub tools_preview: usize,
    /// chrono format string for post dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Seconds the contact-form acknowledgement stays visible.
    #[serde(default = "default_contact_ack_secs")]
    pub contact_ack_secs: u64,
}

fn default_theme() -> String { "default".to_string() }
fn default_tools_preview() -> usize { 3 }
fn default_date_format() -> String { "%B %-d, %Y".to_string() }
fn default_contact_ack_secs() -> u64 { 3 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tools_preview: default_tools_preview(),
            date_format: default_date_format(),
            contact_ack_secs: default_contact_ack_secs(),
        }
    }
}

impl UiConfig {
    pub fn contact_ack(&self) -> Duration {
        Duration::from_secs(self.contact_ack_secs)
    }
}

/// `[catalog]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Catalog document to load instead of the built-in one.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Reject catalogs whose skills reference unknown projects.
    #[serde(default)]
    pub strict_references: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/folio/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Same as [`Config::load`] with an explicit file location.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
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
        .join("folio")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
