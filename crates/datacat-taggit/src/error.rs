use thiserror::Error;

/// Errors that can occur in the taggit system
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaggitError {
	/// Tag normalizes to an empty slug
	#[error("Tag name is invalid: {0:?}")]
	InvalidTagName(String),

	/// Tag slug is shorter than the configured minimum
	#[error("Tag name too short: minimum {min} characters, got {len}")]
	TagNameTooShort { min: usize, len: usize },

	/// Tag slug exceeds the configured maximum
	#[error("Tag name too long: maximum {max} characters, got {len}")]
	TagNameTooLong { max: usize, len: usize },

	/// Configuration error
	#[error("Configuration error: {0}")]
	ConfigError(String),
}

/// Result type for taggit operations
pub type Result<T> = std::result::Result<T, TaggitError>;
