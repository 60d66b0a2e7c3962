//! Startup configuration: where autosaves land and the initial sizes.
//!
//! Sizes can be preset in `defaults.json` under the platform config
//! directory. The file is only ever read; settings applied in a window are
//! not written back.

use crate::document::{DEFAULT_FONT_SIZE, DEFAULT_TAB_WIDTH};
use crate::settings::{check_size, SizeField};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULTS_FILE: &str = "defaults.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Contents of `defaults.json`. Missing keys take the built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub tab_width: i64,
    pub font_size: i64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            tab_width: i64::from(DEFAULT_TAB_WIDTH.get()),
            font_size: i64::from(DEFAULT_FONT_SIZE.get()),
        }
    }
}

impl Defaults {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Home directory; autosaves go to its `Desktop` folder.
    pub home: PathBuf,
    pub tab_width: NonZeroU32,
    pub font_size: NonZeroU32,
}

impl Config {
    /// Built-in sizes rooted at `home`.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            tab_width: DEFAULT_TAB_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Resolve the home directory and read any preset sizes.
    pub fn load() -> Self {
        let home = match directories::BaseDirs::new() {
            Some(dirs) => dirs.home_dir().to_path_buf(),
            None => {
                log::warn!("no home directory found, saving under the current directory");
                PathBuf::from(".")
            }
        };
        let config = Self::with_home(home);
        match config_dir() {
            Some(dir) => config.with_defaults_file(&dir.join(DEFAULTS_FILE)),
            None => config,
        }
    }

    /// Apply preset sizes from `path`. A missing file is not an error; a
    /// broken one, or an out-of-range value, is logged and ignored.
    pub fn with_defaults_file(self, path: &Path) -> Self {
        if !path.exists() {
            return self;
        }
        match Defaults::load(path) {
            Ok(defaults) => self.with_defaults(&defaults),
            Err(e) => {
                log::warn!("ignoring {}: {}", path.display(), e);
                self
            }
        }
    }

    pub fn with_defaults(mut self, defaults: &Defaults) -> Self {
        match check_size(SizeField::TabWidth, defaults.tab_width) {
            Ok(width) => self.tab_width = width,
            Err(e) => log::warn!("default tab width ignored: {}", e),
        }
        match check_size(SizeField::FontSize, defaults.font_size) {
            Ok(size) => self.font_size = size,
            Err(e) => log::warn!("default font size ignored: {}", e),
        }
        self
    }
}

/// Platform config directory for BitNotes, if one can be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "bitnotes", "bitnotes")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_home_uses_builtins() {
        let config = Config::with_home("/home/h");
        assert_eq!(config.home, PathBuf::from("/home/h"));
        assert_eq!(config.tab_width.get(), 4);
        assert_eq!(config.font_size.get(), 16);
    }

    #[test]
    fn test_defaults_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULTS_FILE);
        std::fs::write(&path, r#"{ "tab_width": 2, "font_size": 22 }"#).unwrap();

        let config = Config::with_home(dir.path()).with_defaults_file(&path);
        assert_eq!(config.tab_width.get(), 2);
        assert_eq!(config.font_size.get(), 22);
    }

    #[test]
    fn test_defaults_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULTS_FILE);
        std::fs::write(&path, r#"{ "font_size": 30 }"#).unwrap();

        let defaults = Defaults::load(&path).unwrap();
        assert_eq!(defaults, Defaults { tab_width: 4, font_size: 30 });
        assert!(Defaults::load(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_partial_defaults_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULTS_FILE);
        std::fs::write(&path, r#"{ "font_size": 12 }"#).unwrap();

        let config = Config::with_home(dir.path()).with_defaults_file(&path);
        assert_eq!(config.tab_width.get(), 4);
        assert_eq!(config.font_size.get(), 12);
    }

    #[test]
    fn test_missing_or_broken_file_keeps_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let builtin = Config::with_home(dir.path());

        let missing = dir.path().join("absent.json");
        assert_eq!(builtin.clone().with_defaults_file(&missing), builtin);

        let broken = dir.path().join(DEFAULTS_FILE);
        std::fs::write(&broken, "{ tab_width: ").unwrap();
        assert_eq!(builtin.clone().with_defaults_file(&broken), builtin);
    }

    #[test]
    fn test_out_of_range_values_ignored() {
        let config = Config::with_home("/h").with_defaults(&Defaults {
            tab_width: 0,
            font_size: 10_000,
        });
        assert_eq!(config.tab_width.get(), 4);
        assert_eq!(config.font_size.get(), 16);
    }
}
