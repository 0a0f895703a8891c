//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the
//! peak-shaving configuration service.

use crate::store::config_store::{DEFAULT_MAXIMAL_POWER, DEFAULT_MINIMAL_POWER};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding `server.host`
pub const ENV_HOST: &str = "PEAKSHAVING_HOST";
/// Environment variable overriding `server.port`
pub const ENV_PORT: &str = "PEAKSHAVING_PORT";
/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "PEAKSHAVING_LOG_LEVEL";

/// Main configuration settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server configuration
    pub server: ServerSettings,
    /// Initial power limits
    pub peakshaving: PeakShavingSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
}

/// Values the store starts with
///
/// These seed the in-memory store at startup and are never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PeakShavingSettings {
    /// Initial minimal power in kW
    pub minimal_power: f64,
    /// Initial maximal power in kvar
    pub maximal_power: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "::".to_string(),
            port: 6080,
        }
    }
}

impl Default for PeakShavingSettings {
    fn default() -> Self {
        Self {
            minimal_power: DEFAULT_MINIMAL_POWER,
            maximal_power: DEFAULT_MAXIMAL_POWER,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// Sections and keys missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Override fields with values from the process environment
    pub fn merge_with_env(self) -> Result<Self> {
        self.merge_with(|key| std::env::var(key).ok())
    }

    /// Override fields with values produced by `lookup`
    pub fn merge_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }

        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .map_err(|e| Error::Config(format!("Invalid port: {}", e)))?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        Ok(self)
    }

    /// Check the settings for values the server cannot start with
    ///
    /// Power limits are stored as given and are not checked here.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config("Server host must not be empty"));
        }

        self.logging
            .level
            .parse::<tracing::Level>()
            .map_err(|_| Error::config(format!("Invalid log level: {}", self.logging.level)))?;

        Ok(())
    }

    /// Filter directive for the log subscriber
    pub fn log_directive(&self) -> &str {
        if self.logging.verbose {
            "debug"
        } else {
            &self.logging.level
        }
    }
}
