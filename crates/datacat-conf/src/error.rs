use std::path::PathBuf;

use thiserror::Error;

use crate::env::EnvError;

/// Errors raised while loading [`Settings`](crate::Settings)
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid settings document: {0}")]
	Parse(#[from] toml::de::Error),

	#[error(transparent)]
	Env(#[from] EnvError),

	#[error("Invalid setting {key}: {message}")]
	Invalid { key: String, message: String },
}
