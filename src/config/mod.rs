// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use pair_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Shrink the thumbnail box
//! config.thumbnail_width = 240;
//! config.thumbnail_height = 160;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::domain::Size;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{
    DEFAULT_ANCHOR_X_FRACTION, DEFAULT_ANCHOR_Y_FRACTION, DEFAULT_THUMBNAIL_BORDER,
    DEFAULT_THUMBNAIL_HEIGHT, DEFAULT_THUMBNAIL_WIDTH,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PairLens";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_thumbnail_width")]
    pub thumbnail_width: u32,
    #[serde(default = "default_thumbnail_height")]
    pub thumbnail_height: u32,
    #[serde(default = "default_thumbnail_border")]
    pub thumbnail_border: u32,
    #[serde(default = "default_anchor_x_fraction")]
    pub anchor_x_fraction: f32,
    #[serde(default = "default_anchor_y_fraction")]
    pub anchor_y_fraction: f32,
}

fn default_thumbnail_width() -> u32 {
    DEFAULT_THUMBNAIL_WIDTH
}

fn default_thumbnail_height() -> u32 {
    DEFAULT_THUMBNAIL_HEIGHT
}

fn default_thumbnail_border() -> u32 {
    DEFAULT_THUMBNAIL_BORDER
}

fn default_anchor_x_fraction() -> f32 {
    DEFAULT_ANCHOR_X_FRACTION
}

fn default_anchor_y_fraction() -> f32 {
    DEFAULT_ANCHOR_Y_FRACTION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
            thumbnail_height: DEFAULT_THUMBNAIL_HEIGHT,
            thumbnail_border: DEFAULT_THUMBNAIL_BORDER,
            anchor_x_fraction: DEFAULT_ANCHOR_X_FRACTION,
            anchor_y_fraction: DEFAULT_ANCHOR_Y_FRACTION,
        }
    }
}

impl Config {
    /// The configured thumbnail target box as a size.
    #[must_use]
    pub fn thumbnail_box(&self) -> Size {
        Size::new(self.thumbnail_width, self.thumbnail_height)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_thumbnail_box() {
        let config = Config {
            thumbnail_width: 240,
            thumbnail_height: 160,
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.thumbnail_width, 240);
        assert_eq!(loaded.thumbnail_height, 160);
        assert_eq!(loaded.thumbnail_border, DEFAULT_THUMBNAIL_BORDER);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        std::fs::write(&config_path, "not = [valid").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.thumbnail_width, DEFAULT_THUMBNAIL_WIDTH);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("thumbnail_width = 100").expect("parse failed");
        assert_eq!(config.thumbnail_width, 100);
        assert_eq!(config.thumbnail_height, DEFAULT_THUMBNAIL_HEIGHT);
    }

    #[test]
    fn thumbnail_box_reflects_fields() {
        let config = Config::default();
        assert_eq!(
            config.thumbnail_box(),
            Size::new(DEFAULT_THUMBNAIL_WIDTH, DEFAULT_THUMBNAIL_HEIGHT)
        );
    }
}
