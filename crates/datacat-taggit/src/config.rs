//! Tag normalization settings

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaggitError};

/// Default minimum slug length
pub const DEFAULT_MIN_LENGTH: usize = 3;
/// Default maximum slug length
pub const DEFAULT_MAX_LENGTH: usize = 96;

/// Bounds applied to normalized tags
///
/// Slugs shorter than `min_length` or longer than `max_length` are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
	pub min_length: usize,
	pub max_length: usize,
}

impl TagConfig {
	pub fn builder() -> TagConfigBuilder {
		TagConfigBuilder::default()
	}

	/// Check that the bounds describe a non-empty range
	pub fn validate(&self) -> Result<()> {
		if self.min_length > self.max_length {
			return Err(TaggitError::ConfigError(format!(
				"min_length ({}) is greater than max_length ({})",
				self.min_length, self.max_length
			)));
		}
		Ok(())
	}
}

impl Default for TagConfig {
	fn default() -> Self {
		Self {
			min_length: DEFAULT_MIN_LENGTH,
			max_length: DEFAULT_MAX_LENGTH,
		}
	}
}

/// Builder for [`TagConfig`]
#[derive(Debug, Default)]
pub struct TagConfigBuilder {
	min_length: Option<usize>,
	max_length: Option<usize>,
}

impl TagConfigBuilder {
	pub fn min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	pub fn max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn build(self) -> Result<TagConfig> {
		let config = TagConfig {
			min_length: self.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
			max_length: self.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
		};
		config.validate()?;
		Ok(config)
	}
}
