// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[controls]` - Resize/scroll step sizes, wheel factor, double click delay
//! - `[display]` - Minimum page size
//! - `[scan]` - Image extension pattern and symlink handling
//!
//! Every field is optional; missing fields use the values in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use manga_reader::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("{}", config.scan.extension_pattern);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Keyboard and mouse step sizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    /// Width change per resize step (pixels).
    pub zoom_step_width: i32,
    /// Height change per resize step (pixels).
    pub zoom_step_height: i32,
    /// Vertical movement per scroll step (pixels).
    pub scroll_step: i32,
    /// Step multiplier for one mouse wheel notch.
    pub wheel_factor: i32,
    /// Double click detection window (milliseconds).
    pub double_click_ms: u64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            zoom_step_width: DEFAULT_ZOOM_STEP_WIDTH,
            zoom_step_height: DEFAULT_ZOOM_STEP_HEIGHT,
            scroll_step: DEFAULT_SCROLL_STEP,
            wheel_factor: DEFAULT_WHEEL_FACTOR,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
        }
    }
}

impl ControlsConfig {
    /// Returns a copy with every value forced into its supported range.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            zoom_step_width: self.zoom_step_width.max(1),
            zoom_step_height: self.zoom_step_height.max(1),
            scroll_step: self.scroll_step.max(1),
            wheel_factor: self.wheel_factor.max(1),
            double_click_ms: self.double_click_ms.clamp(1, MAX_DOUBLE_CLICK_MS),
        }
    }

    pub fn double_click_interval(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}

/// Page display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Resizes producing a narrower page are rejected.
    pub min_page_width: i32,
    /// Resizes producing a shorter page are rejected.
    pub min_page_height: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            min_page_width: DEFAULT_MIN_PAGE_WIDTH,
            min_page_height: DEFAULT_MIN_PAGE_HEIGHT,
        }
    }
}

/// Image discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Case-insensitive extension pattern, `?` matches one character.
    pub extension_pattern: String,
    /// Whether symlinked directories are descended into while scanning.
    /// Symlinks to files are always collected.
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension_pattern: DEFAULT_EXTENSION_PATTERN.to_string(),
            follow_links: false,
        }
    }
}

impl ScanConfig {
    /// Returns a copy whose pattern is usable (non-empty, no leading dot).
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let pattern = self.extension_pattern.trim().trim_start_matches('.');
        Self {
            extension_pattern: if pattern.is_empty() {
                DEFAULT_EXTENSION_PATTERN.to_string()
            } else {
                pattern.to_string()
            },
            follow_links: self.follow_links,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub controls: ControlsConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
                    return (
                        Config::default(),
                        Some(format!(
                            "ignoring {}, using defaults: {}",
                            path.display(),
                            err
                        )),
                    );
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
