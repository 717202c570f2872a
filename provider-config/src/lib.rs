//! Configuration management for the provider plugin.
//!
//! Every field has a default, so running without a configuration file is the
//! normal case. A TOML file may override any subset:
//!
//! ```toml
//! [log]
//! filter = "debug"
//!
//! [identity]
//! interval = 360
//! key_length = 32
//! ```

#![warn(missing_docs, clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use provider_identity::{ConnectionSettings, IdentityError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Source [`std::io::Error`].
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`ProviderConfig`].
    #[error("cannot parse config {}: {source}", .path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Source [`toml::de::Error`].
        #[source]
        source: toml::de::Error,
    },
    /// A value was rejected.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<IdentityError> for ConfigError {
    fn from(err: IdentityError) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Logging settings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_owned(),
        }
    }
}

/// Top-level provider configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Logging settings.
    pub log: LogConfig,
    /// Settings for generated network tokens.
    pub identity: ConnectionSettings,
}

impl ProviderConfig {
    /// Loads the configuration from `path`, or the defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or when
    /// the resulting configuration fails [`validate`](Self::validate).
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::Invalid`] for rejected values.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first rejected value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log.filter cannot be empty".to_owned()));
        }
        self.identity.validate()?;
        Ok(())
    }
}
