//! Configuration types for hackle.
//!
//! [`Config::load`] reads `~/.config/hackle/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[api]
base_url      = "https://hn.algolia.com/api/v1"
hits_per_page = 100
default_query = "redux"

[ui]
show_url         = true
title_width_pct  = 40
author_width_pct = 30
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/hackle/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: u32,
    /// Query committed and fetched at startup.
    #[serde(default = "default_query")]
    pub default_query: String,
}

fn default_base_url() -> String { "https://hn.algolia.com/api/v1".to_string() }
fn default_hits_per_page() -> u32 { 100 }
fn default_query() -> String { "redux".to_string() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            hits_per_page: default_hits_per_page(),
            default_query: default_query(),
        }
    }
}

/// `[ui]` section of `config.toml`.
///
/// The two width percentages cover the title and author columns; comments
/// and points split the remainder evenly.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_show_url")]
    pub show_url: bool,
    #[serde(default = "default_title_width_pct")]
    pub title_width_pct: u16,
    #[serde(default = "default_author_width_pct")]
    pub author_width_pct: u16,
}

fn default_show_url() -> bool { true }
fn default_title_width_pct() -> u16 { 40 }
fn default_author_width_pct() -> u16 { 30 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_url: default_show_url(),
            title_width_pct: default_title_width_pct(),
            author_width_pct: default_author_width_pct(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/hackle/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
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
        .join("hackle")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
