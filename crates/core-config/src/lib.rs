//! Session configuration.
//!
//! Settings come from three layers, strongest last: built-in defaults,
//! an optional `slate.toml` (working directory first, then the platform
//! config dir), and command-line flags. The resolved `Config` is fixed
//! for the session lifetime; nothing re-reads it at runtime.
//!
//! Parsing is tolerant: a missing or malformed file falls back to
//! defaults rather than failing startup. Unknown TOML fields are
//! ignored so the format can grow without breaking old files.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::info;

pub const DEFAULT_ROWS: u16 = 20;
pub const DEFAULT_MARGIN: u16 = 5;

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    #[serde(default = "ViewConfig::default_rows")]
    pub rows: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            rows: Self::default_rows(),
        }
    }
}

impl ViewConfig {
    const fn default_rows() -> u16 {
        DEFAULT_ROWS
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarginConfig {
    #[serde(default = "MarginConfig::default_vertical")]
    pub vertical: u16,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            vertical: Self::default_vertical(),
        }
    }
}

impl MarginConfig {
    const fn default_vertical() -> u16 {
        DEFAULT_MARGIN
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScrollConfig {
    #[serde(default)]
    pub margin: MarginConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct InputConfig {
    /// Modal (vim-style) editing instead of plain direct editing.
    #[serde(default)]
    pub modal: bool,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Resolved, immutable session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Visible text rows.
    pub rows: usize,
    pub modal: bool,
    /// Effective scroll margin (clamped against `rows`).
    pub margin: usize,
}

/// Best-effort config path: working directory first, then the platform
/// config directory.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("slate.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("slate").join("slate.toml");
    }
    PathBuf::from("slate.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<ConfigFile> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => Ok(file),
            Err(e) => {
                info!(target: "config", file = %path.display(), error = %e, "config_parse_failed_using_defaults");
                Ok(ConfigFile::default())
            }
        }
    } else {
        Ok(ConfigFile::default())
    }
}

impl Config {
    /// Merge CLI overrides onto the file values and clamp the margin so
    /// a window of `rows` lines always has scroll hysteresis room:
    /// `1 <= margin <= max((rows - 2) / 2, 1)`.
    pub fn resolve(file: &ConfigFile, cli_rows: Option<u16>, cli_modal: bool) -> Self {
        let rows = cli_rows.unwrap_or(file.view.rows).max(1);
        let raw_margin = file.scroll.margin.vertical;
        let cap = ((rows.saturating_sub(2)) / 2).max(1);
        let margin = raw_margin.clamp(1, cap);
        if margin != raw_margin {
            info!(
                target: "config",
                raw = raw_margin,
                clamped = margin,
                cap,
                rows,
                "scroll_margin_clamped"
            );
        }
        Self {
            rows: rows as usize,
            modal: cli_modal || file.input.modal,
            margin: margin as usize,
        }
    }
}
