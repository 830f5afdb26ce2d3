//! Configuration management module.
//!
//! This module handles loading the optional configuration file holding the
//! theme, log panel and hotkey preferences. Todo data is never written to disk.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, HotkeyOverrides, KeyContext, ViewHotkeys};

use crate::error::AppResult;
use crate::ui::Theme;
use log::*;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/todo-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub show_log: bool,
    pub hotkeys: ViewHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub show_log: bool,
    #[serde(default)]
    pub hotkeys: HotkeyOverrides,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            show_log: false,
            hotkeys: ViewHotkeys::default(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided or
    /// the default one otherwise. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(FILE_NAME);
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            return Ok(());
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        self.apply(&contents)
    }

    /// Overwrite the settings with those found in the YAML document.
    ///
    fn apply(&mut self, contents: &str) -> AppResult<()> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.theme_name = data.theme_name;
        self.show_log = data.show_log;
        self.hotkeys = ViewHotkeys::default();
        self.hotkeys.apply(data.hotkeys);
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Resolve the configured theme, falling back to the default for
    /// unknown names.
    ///
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', using '{}'",
                self.theme_name,
                Theme::default().name
            );
            Theme::default()
        })
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
