//! Session configuration loaded from TOML.
//!
//! ```toml
//! max_edits = 5
//!
//! [quota]
//! limit = 10
//! window_ms = 86400000
//! policy = "rolling"   # or "aligned"
//! path = "/var/lib/retouch/quota.json"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use retouch_quota::QuotaConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("failed to serialize config: {0}")]
	Serialize(#[from] toml::ser::Error),

	/// Error reading the configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: io::Error,
	},

	/// A value is outside its allowed range.
	#[error("invalid value for '{field}': {reason}")]
	Invalid { field: &'static str, reason: &'static str },
}

/// Limits applied by an [`EditSession`](crate::EditSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
	/// Maximum edits stacked on one base image.
	pub max_edits: usize,
	/// Generation quota.
	pub quota: QuotaConfig,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			max_edits: 5,
			quota: QuotaConfig::default(),
		}
	}
}

impl SessionConfig {
	/// `<config_dir>/retouch/config.toml`, if the platform has one.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("retouch").join("config.toml"))
	}

	/// Parses and validates a TOML document.
	pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads `path`, falling back to defaults when the file does not exist.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		match std::fs::read_to_string(path) {
			Ok(text) => {
				debug!(path = %path.display(), "loaded config");
				Self::from_toml(&text)
			}
			Err(error) if error.kind() == io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "no config file, using defaults");
				Ok(Self::default())
			}
			Err(error) => Err(ConfigError::Io {
				path: path.to_path_buf(),
				error,
			}),
		}
	}

	pub fn to_toml(&self) -> Result<String, ConfigError> {
		Ok(toml::to_string_pretty(self)?)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_edits == 0 {
			return Err(ConfigError::Invalid {
				field: "max_edits",
				reason: "must be at least 1",
			});
		}
		if self.quota.limit == 0 {
			return Err(ConfigError::Invalid {
				field: "quota.limit",
				reason: "must be at least 1",
			});
		}
		if self.quota.window_ms <= 0 {
			return Err(ConfigError::Invalid {
				field: "quota.window_ms",
				reason: "must be positive",
			});
		}
		Ok(())
	}
}
