//! Client configuration: a TOML file plus command-line overrides.

use directories::{ProjectDirs, UserDirs};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid backend URL {0:?}: must start with http:// or https://")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Base URL of the processing backend.
    pub backend_url: String,
    /// Path of the upload endpoint on the backend.
    pub upload_path: String,
    /// Multipart field name each file is sent under.
    pub field_name: String,
    /// Unpack and show the results before downloading. When off, the
    /// archive is saved as soon as it arrives.
    pub preview_results: bool,
    /// Where downloads are written. `~` is expanded.
    pub download_dir: String,
    /// Upper bound on one upload request, in seconds.
    pub request_timeout_secs: u64,
    /// File name for the archive saved from the preview page.
    pub original_archive_name: String,
    /// File name for the archive saved when previews are off.
    pub processed_archive_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8080".into(),
            upload_path: "/upload_media".into(),
            field_name: "files".into(),
            preview_results: true,
            download_dir: default_download_dir(),
            request_timeout_secs: 300,
            original_archive_name: "original_archive.zip".into(),
            processed_archive_name: "processed_files.zip".into(),
        }
    }
}

fn default_download_dir() -> String {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|d| d.display().to_string()))
        .unwrap_or_else(|| "~/Downloads".into())
}

impl Config {
    /// `<config dir>/scootwatch/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "scootwatch").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`; a missing file means all defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// JSON schema of the config file.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Config)).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(self.backend_url.clone()));
        }
        Ok(())
    }

    /// Full URL files are posted to.
    pub fn upload_url(&self) -> String {
        let base = self.backend_url.trim_end_matches('/');
        let path = self.upload_path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Name the downloaded archive is saved under for this configuration.
    pub fn archive_name(&self) -> &str {
        if self.preview_results {
            &self.original_archive_name
        } else {
            &self.processed_archive_name
        }
    }
}
