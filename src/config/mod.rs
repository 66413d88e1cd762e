// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[zoom]` - Maximum scale, double-tap target and button step
//! - `[catalog]` - Thumbnail prefix and the page list shown by the screen
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PINCH_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pinch_lens::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.zoom.max_scale = Some(8.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{MaxScale, PageList, ZoomLimits, ZoomStep};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PinchLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PINCH_LENS_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Zoom behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    /// Highest scale reachable by any gesture or button.
    #[serde(default = "default_max_scale", skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<f32>,

    /// Scale a double-tap jumps to from rest.
    #[serde(
        default = "default_double_tap_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_scale: Option<f32>,

    /// Scale increment of the zoom in/out buttons.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub step: Option<f32>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_scale: default_max_scale(),
            double_tap_scale: default_double_tap_scale(),
            step: default_zoom_step(),
        }
    }
}

/// One `[[catalog.pages]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageEntry {
    pub id: u32,
    pub image_name: String,
}

/// Page catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_prefix: Option<String>,

    #[serde(default = "default_pages")]
    pub pages: Vec<PageEntry>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            thumbnail_prefix: None,
            pages: default_pages(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub zoom: ZoomConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Zoom limits with every configured value clamped to its valid range.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        let max_scale = MaxScale::new(self.zoom.max_scale.unwrap_or(DEFAULT_MAX_SCALE));
        let step = ZoomStep::new(self.zoom.step.unwrap_or(DEFAULT_ZOOM_STEP));
        let double_tap = self
            .zoom
            .double_tap_scale
            .unwrap_or(DEFAULT_DOUBLE_TAP_SCALE);
        ZoomLimits::new(max_scale, double_tap, step)
    }

    /// Builds the page catalog.
    ///
    /// Fails when the configured list is empty, holds a zero id or repeats an id.
    pub fn page_list(&self) -> Result<PageList> {
        let prefix = self
            .catalog
            .thumbnail_prefix
            .as_deref()
            .unwrap_or(THUMBNAIL_PREFIX);
        PageList::from_entries(
            self.catalog
                .pages
                .iter()
                .map(|entry| (entry.id, entry.image_name.as_str())),
            prefix,
        )
    }
}

fn default_max_scale() -> Option<f32> {
    Some(DEFAULT_MAX_SCALE)
}

fn default_double_tap_scale() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_SCALE)
}

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

fn default_pages() -> Vec<PageEntry> {
    DEFAULT_PAGES
        .iter()
        .map(|&(id, image_name)| PageEntry {
            id,
            image_name: image_name.to_string(),
        })
        .collect()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring an explicit override first and the
/// environment variable second.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "falling back to default config"
                    );
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
