//! Settings document

use std::path::Path;

use datacat_taggit::TagConfig;
use serde::{Deserialize, Serialize};

use crate::env::Env;
use crate::error::SettingsError;

/// Prefix of environment overrides
pub const DEFAULT_ENV_PREFIX: &str = "DATACAT_";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub tags: TagConfig,
	pub i18n: I18nSettings,
	pub tasks: TaskSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
	pub default_locale: String,
	pub fallback_locale: String,
}

impl Default for I18nSettings {
	fn default() -> Self {
		Self {
			default_locale: "en".to_string(),
			fallback_locale: "en".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskSettings {
	pub default_queue: String,
}

impl Default for TaskSettings {
	fn default() -> Self {
		Self {
			default_queue: "default".to_string(),
		}
	}
}

impl Settings {
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loading settings file");
		Self::from_toml_str(&source)
	}

	/// Defaults overridden from `DATACAT_*` variables
	pub fn from_env() -> Result<Self, SettingsError> {
		let mut settings = Self::default();
		settings.apply_env(&Env::new().with_prefix(DEFAULT_ENV_PREFIX))?;
		Ok(settings)
	}

	/// Override fields from environment variables
	///
	/// Recognized keys (after the prefix): `TAGS_MIN_LENGTH`,
	/// `TAGS_MAX_LENGTH`, `DEFAULT_LOCALE`, `FALLBACK_LOCALE`,
	/// `TASKS_DEFAULT_QUEUE`.
	pub fn apply_env(&mut self, env: &Env) -> Result<(), SettingsError> {
		if let Some(min) = env.optional_int("TAGS_MIN_LENGTH")? {
			self.tags.min_length = to_length("TAGS_MIN_LENGTH", min)?;
		}
		if let Some(max) = env.optional_int("TAGS_MAX_LENGTH")? {
			self.tags.max_length = to_length("TAGS_MAX_LENGTH", max)?;
		}
		if let Some(locale) = env.optional_str("DEFAULT_LOCALE")? {
			self.i18n.default_locale = locale;
		}
		if let Some(locale) = env.optional_str("FALLBACK_LOCALE")? {
			self.i18n.fallback_locale = locale;
		}
		if let Some(queue) = env.optional_str("TASKS_DEFAULT_QUEUE")? {
			self.tasks.default_queue = queue;
		}
		self.validate()
	}

	pub fn validate(&self) -> Result<(), SettingsError> {
		self.tags.validate().map_err(|e| SettingsError::Invalid {
			key: "tags".to_string(),
			message: e.to_string(),
		})?;
		if self.i18n.default_locale.trim().is_empty() {
			return Err(SettingsError::Invalid {
				key: "i18n.default_locale".to_string(),
				message: "must not be empty".to_string(),
			});
		}
		Ok(())
	}
}

fn to_length(key: &str, value: i64) -> Result<usize, SettingsError> {
	usize::try_from(value).map_err(|_| SettingsError::Invalid {
		key: key.to_string(),
		message: format!("expected a non-negative length, got {}", value),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document_uses_defaults() {
		let settings = Settings::from_toml_str("").unwrap();

		assert_eq!(settings, Settings::default());
		assert_eq!(settings.tasks.default_queue, "default");
	}

	#[rstest]
	fn test_inverted_tag_bounds_are_invalid() {
		let result = Settings::from_toml_str("[tags]\nmin_length = 10\nmax_length = 4\n");

		assert!(matches!(result, Err(SettingsError::Invalid { key, .. }) if key == "tags"));
	}

	#[rstest]
	fn test_malformed_document() {
		let result = Settings::from_toml_str("[tags\n");

		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}
}
