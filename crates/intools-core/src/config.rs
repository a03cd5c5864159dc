// SPDX-License-Identifier: Apache-2.0

//! Configuration management for the InternalTools server.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `INTOOLS_`)
//! 2. Config file: `~/.config/intools/config.toml`
//! 3. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Examples
//!
//! ```bash
//! # Run the deliberately vulnerable fixture on all interfaces
//! INTOOLS_SECURITY__PROFILE=vulnerable INTOOLS_SERVER__HOST=0.0.0.0 intools
//! ```

use std::fmt;
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::IntoolsError;

/// Behavior profile for the search and health endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Argument-vector execution, escaped output, secret-free health report.
    #[default]
    Hardened,
    /// Shell-string execution, raw output, health report with embedded secrets.
    ///
    /// Only for training and scanner fixtures.
    Vulnerable,
}

impl Profile {
    /// Returns the profile name as used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Hardened => "hardened",
            Profile::Vulnerable => "vulnerable",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener settings.
    pub server: ServerConfig,
    /// Endpoint behavior settings.
    pub security: SecurityConfig,
}

/// Listener settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind. IPv6 literals are accepted without brackets.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Endpoint behavior settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Which behavior `/search` and `/health` exhibit.
    pub profile: Profile,
}

/// Returns the InternalTools configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to the platform config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("intools");
    }
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("intools")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `INTOOLS_` and double underscore
/// for nested keys (e.g., `INTOOLS_SERVER__PORT`).
///
/// # Errors
///
/// Returns `IntoolsError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, IntoolsError> {
    let config_path = config_file_path();

    let config = Config::builder()
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        .add_source(
            Environment::with_prefix("INTOOLS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
