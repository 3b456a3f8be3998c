//! Optional user settings (`config.toml`) and the per-run configuration.

use crate::error::{Api2tsError, Result};
use crate::paths::expand_home;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Type name used when the user accepts the default.
pub const DEFAULT_TYPE_NAME: &str = "ApiTypes";

/// Editor command offered when none is configured.
pub const DEFAULT_EDITOR: &str = "code";

/// Everything needed for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub url: Url,
    pub name: String,
    pub path: PathBuf,
}

/// Settings read from `config.toml`. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub default_name: Option<String>,
    pub default_path: Option<String>,
    pub editor: Option<String>,
}

impl Settings {
    /// Load settings from `explicit`, or from the default location.
    ///
    /// A missing default file yields empty settings; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_settings_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Api2tsError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content).map_err(|e| match e {
            Api2tsError::Config(msg) => Api2tsError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Api2tsError::Config(e.to_string()))
    }

    pub fn type_name(&self) -> &str {
        self.default_name.as_deref().unwrap_or(DEFAULT_TYPE_NAME)
    }

    pub fn save_path(&self) -> Option<PathBuf> {
        self.default_path.as_deref().map(expand_home)
    }

    pub fn editor(&self) -> &str {
        self.editor.as_deref().unwrap_or(DEFAULT_EDITOR)
    }
}

/// `<config_dir>/api2ts/config.toml`, when the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("api2ts").join("config.toml"))
}
