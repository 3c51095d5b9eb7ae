//! User configuration
//!
//! Loaded from `<config dir>/cmlog/config.toml`. Every field has a default,
//! so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::device::constants::{BUILD_MANIFEST_PATH, ORG_MARKER};
use crate::device::default_official_tags;

/// Placeholder for the change identifier in `review_url`
pub const CHANGE_ID_PLACEHOLDER: &str = "{id}";

/// Errors that can occur when loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub changelog: ChangelogConfig,
    pub device: DeviceConfig,
}

/// Changelog feed and review site settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Feed base URL; requests go to `<base_url>/changes/<version>/<device>`
    pub base_url: String,
    /// Review page template, `{id}` is replaced by the change identifier
    pub review_url: String,
    /// Prefix stripped from project names when displayed
    pub project_prefix: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://api.cmxlog.com".to_string(),
            review_url: "http://review.cyanogenmod.org/#/c/{id}".to_string(),
            project_prefix: "android_".to_string(),
        }
    }
}

/// Device property settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Build manifest location on the target
    pub manifest_path: String,
    /// Substring identifying organization projects in the manifest
    pub org_marker: String,
    /// Release types treated as official
    pub official_tags: Vec<String>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            manifest_path: BUILD_MANIFEST_PATH.to_string(),
            org_marker: ORG_MARKER.to_string(),
            official_tags: default_official_tags(),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cmlog").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render the config as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
