// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving the
//! per-kind overlay settings to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use telegraph::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Allow two snackbars at once
//! config.snackbar.max_simultaneous_items = 2;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use defaults::{
    DEFAULT_BANNER_ANIMATION_MS, DEFAULT_BANNER_CLEANUP_FALLBACK_MS, DEFAULT_BANNER_MAX_ITEMS,
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, DEFAULT_DIALOG_ANIMATION_MS,
    DEFAULT_DIALOG_CLEANUP_FALLBACK_MS, DEFAULT_SNACKBAR_ANIMATION_MS, DEFAULT_SNACKBAR_MAX_ITEMS,
    DEFAULT_SNACKBAR_TIMEOUT_MS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Telegraph";
/// Overrides the configuration directory (tests, sandboxed hosts).
pub const CONFIG_DIR_ENV: &str = "TELEGRAPH_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub snackbar: SnackbarConfig,
    pub banner: BannerConfig,
    pub dialog: DialogConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnackbarConfig {
    pub max_simultaneous_items: usize,
    pub default_timeout_ms: u64,
    pub animation_duration_ms: u64,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            max_simultaneous_items: DEFAULT_SNACKBAR_MAX_ITEMS,
            default_timeout_ms: DEFAULT_SNACKBAR_TIMEOUT_MS,
            animation_duration_ms: DEFAULT_SNACKBAR_ANIMATION_MS,
        }
    }
}

impl SnackbarConfig {
    /// `None` when the configured timeout is zero.
    #[must_use]
    pub fn default_timeout(&self) -> Option<Duration> {
        (self.default_timeout_ms > 0).then(|| Duration::from_millis(self.default_timeout_ms))
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub max_simultaneous_items: usize,
    pub animation_duration_ms: u64,
    pub cleanup_fallback_ms: u64,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            max_simultaneous_items: DEFAULT_BANNER_MAX_ITEMS,
            animation_duration_ms: DEFAULT_BANNER_ANIMATION_MS,
            cleanup_fallback_ms: DEFAULT_BANNER_CLEANUP_FALLBACK_MS,
        }
    }
}

impl BannerConfig {
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// `None` disables the fallback.
    #[must_use]
    pub fn cleanup_fallback(&self) -> Option<Duration> {
        (self.cleanup_fallback_ms > 0).then(|| Duration::from_millis(self.cleanup_fallback_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub animation_duration_ms: u64,
    pub cleanup_fallback_ms: u64,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_DIALOG_ANIMATION_MS,
            cleanup_fallback_ms: DEFAULT_DIALOG_CLEANUP_FALLBACK_MS,
        }
    }
}

impl DialogConfig {
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[must_use]
    pub fn cleanup_fallback(&self) -> Option<Duration> {
        (self.cleanup_fallback_ms > 0).then(|| Duration::from_millis(self.cleanup_fallback_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads `path`. A file that is not valid TOML yields the defaults and a
/// warning rather than an error, so a hand-edited file cannot stop the host
/// from showing overlays.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
