//! Tag normalization
//!
//! A raw tag becomes a lowercase ASCII slug: punctuation is stripped and
//! whitespace runs collapse to single hyphens.

use crate::config::TagConfig;
use crate::error::{Result, TaggitError};

/// Converts raw tag input into a canonical slug
pub trait Normalizer: Send + Sync {
	/// Normalize a single tag, failing when it cannot be kept
	fn normalize(&self, raw: &str) -> Result<String>;
}

/// `slug`-based normalizer enforcing [`TagConfig`] length bounds
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNormalizer {
	config: TagConfig,
}

impl DefaultNormalizer {
	pub fn new(config: TagConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &TagConfig {
		&self.config
	}

	/// Normalize a list of tags, dropping invalid ones and duplicates
	///
	/// First-seen order is preserved.
	pub fn normalize_all<I, S>(&self, raw: I) -> Vec<String>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut tags: Vec<String> = Vec::new();
		for tag in raw {
			match self.normalize(tag.as_ref()) {
				Ok(slug) => {
					if !tags.contains(&slug) {
						tags.push(slug);
					}
				}
				Err(error) => {
					tracing::debug!(tag = tag.as_ref(), %error, "dropping tag");
				}
			}
		}
		tags
	}
}

impl Normalizer for DefaultNormalizer {
	fn normalize(&self, raw: &str) -> Result<String> {
		let slug = slug::slugify(raw);
		let len = slug.chars().count();
		if len == 0 {
			return Err(TaggitError::InvalidTagName(raw.to_string()));
		}
		if len < self.config.min_length {
			return Err(TaggitError::TagNameTooShort {
				min: self.config.min_length,
				len,
			});
		}
		if len > self.config.max_length {
			return Err(TaggitError::TagNameTooLong {
				max: self.config.max_length,
				len,
			});
		}
		Ok(slug)
	}
}

/// Normalize `raw` tags with a [`DefaultNormalizer`] built from `config`
pub fn normalize_tags<I, S>(raw: I, config: &TagConfig) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	DefaultNormalizer::new(*config).normalize_all(raw)
}
