//! Application configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::permission::PermissionState;

/// Top-level application configuration.
///
/// All fields have sensible defaults so sdbrowse works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Where browsing starts and what it shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage root. Back navigation stops here. Defaults to `$HOME`.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl StorageConfig {
    /// The configured root, else `$HOME`, else `/`.
    pub fn root_or_default(&self) -> PathBuf {
        self.root
            .clone()
            .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}

/// Parameters of the emulated platform permission model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default = "default_api_level")]
    pub api_level: u32,
    #[serde(default = "default_package_name")]
    pub package_name: String,
    #[serde(default)]
    pub initial_permission: PermissionState,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            api_level: default_api_level(),
            package_name: default_package_name(),
            initial_permission: PermissionState::default(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_icons: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_icons: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_api_level() -> u32 {
    34
}

fn default_package_name() -> String {
    "org.sdbrowse.app".to_string()
}
