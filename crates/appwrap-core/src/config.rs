//! Configuration management for appwrap.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. Everything here is a fallback: values
//! supplied on a packaging request always take precedence.

use crate::error::{ConfigError, ConfigResult};
use crate::filename::is_safe_app_name;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Electron release used when the request does not pin one.
pub const DEFAULT_ELECTRON_VERSION: &str = "1.1.3";

/// Application name used when no name can be supplied or inferred.
pub const DEFAULT_APP_NAME: &str = "APP";

/// Main application configuration.
///
/// This is loaded from `~/.config/appwrap/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Static defaults applied to packaging requests
    pub defaults: DefaultsConfig,
    /// Settings for the inference collaborators
    pub inference: InferenceConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(config_path: &Path) -> ConfigResult<Self> {
        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(config_path)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `APPWRAP_ELECTRON_VERSION`: Override the default Electron version
    /// - `APPWRAP_TITLE_TIMEOUT_SECS`: Override the page title request timeout
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides on top of the current values.
    ///
    /// Unparseable values and a zero timeout are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("APPWRAP_ELECTRON_VERSION") {
            if !val.trim().is_empty() {
                tracing::debug!("Override defaults.electron_version from env: {}", val);
                self.defaults.electron_version = val.trim().to_string();
            }
        }

        if let Ok(val) = std::env::var("APPWRAP_TITLE_TIMEOUT_SECS") {
            match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    self.inference.title_timeout_secs = secs;
                    tracing::debug!("Override inference.title_timeout_secs from env: {}", secs);
                }
                _ => tracing::warn!("Ignoring invalid APPWRAP_TITLE_TIMEOUT_SECS: {}", val),
            }
        }
    }

    /// Check values that would otherwise produce an unusable request.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.defaults.width == 0 || self.defaults.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "defaults.width/height".to_string(),
                reason: "window dimensions must be positive".to_string(),
            });
        }
        if self.defaults.electron_version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "defaults.electron_version".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !is_safe_app_name(&self.defaults.app_name) {
            return Err(ConfigError::InvalidValue {
                field: "defaults.app_name".to_string(),
                reason: "must be a non-empty ASCII string usable as a file name".to_string(),
            });
        }
        if self.inference.title_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "inference.title_timeout_secs".to_string(),
                reason: "timeout must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/appwrap/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "appwrap", "appwrap").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Static defaults for packaging requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Electron version used when the request does not specify one
    pub electron_version: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Fallback application name
    pub app_name: String,
    /// Placeholder application template handed to the packager
    pub app_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            electron_version: DEFAULT_ELECTRON_VERSION.to_string(),
            width: 1280,
            height: 800,
            app_name: DEFAULT_APP_NAME.to_string(),
            app_dir: PathBuf::from("app"),
        }
    }
}

/// Inference collaborator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Timeout for the page title request in seconds
    pub title_timeout_secs: u64,
    /// User agent sent when fetching the target page for its title
    pub title_user_agent: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            title_timeout_secs: 10,
            title_user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/50.0.2661.86 Safari/537.36".to_string(),
        }
    }
}
