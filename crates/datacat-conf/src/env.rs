//! Environment variable handling
//!
//! Typed lookups of prefixed environment variables.

use std::env;

/// Environment variable manager with prefix support
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "DATACAT_")
	pub prefix: Option<String>,
}

impl Env {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set a prefix for all environment variable lookups
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	fn get_key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	fn raw(&self, key: &str) -> Result<(String, Option<String>), EnvError> {
		let full_key = self.get_key_name(key);
		validate_env_var_name(&full_key)?;
		let value = env::var(&full_key).ok();
		Ok((full_key, value))
	}

	/// Read a string value, `None` when unset
	pub fn optional_str(&self, key: &str) -> Result<Option<String>, EnvError> {
		Ok(self.raw(key)?.1)
	}

	pub fn str(&self, key: &str) -> Result<String, EnvError> {
		self.str_with_default(key, None)
	}

	pub fn str_with_default(&self, key: &str, default: Option<&str>) -> Result<String, EnvError> {
		match self.raw(key)? {
			(_, Some(val)) => Ok(val),
			(full_key, None) => default
				.map(str::to_string)
				.ok_or(EnvError::MissingVariable(full_key)),
		}
	}

	pub fn bool(&self, key: &str) -> Result<bool, EnvError> {
		self.bool_with_default(key, None)
	}

	pub fn bool_with_default(&self, key: &str, default: Option<bool>) -> Result<bool, EnvError> {
		match self.raw(key)? {
			(full_key, Some(val)) => parse_bool(&val).map_err(|error| EnvError::ParseError {
				key: full_key,
				value_len: val.len(),
				error,
			}),
			(full_key, None) => default.ok_or(EnvError::MissingVariable(full_key)),
		}
	}

	pub fn int(&self, key: &str) -> Result<i64, EnvError> {
		self.int_with_default(key, None)
	}

	pub fn int_with_default(&self, key: &str, default: Option<i64>) -> Result<i64, EnvError> {
		match self.raw(key)? {
			(full_key, Some(val)) => val.trim().parse::<i64>().map_err(|e| EnvError::ParseError {
				key: full_key,
				value_len: val.len(),
				error: e.to_string(),
			}),
			(full_key, None) => default.ok_or(EnvError::MissingVariable(full_key)),
		}
	}

	/// Read an integer value, `None` when unset
	pub fn optional_int(&self, key: &str) -> Result<Option<i64>, EnvError> {
		match self.raw(key)? {
			(_, None) => Ok(None),
			(_, Some(_)) => self.int(key).map(Some),
		}
	}
}

/// Parse a boolean the way Django-environ does
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "yes" | "1" | "on" | "y" | "t" => Ok(true),
		"false" | "no" | "0" | "off" | "n" | "f" | "" => Ok(false),
		other => Err(format!("not a boolean: {:?}", other)),
	}
}

/// Rejects names that are empty, contain control characters, or contain `=`
pub fn validate_env_var_name(name: &str) -> Result<(), EnvError> {
	if name.is_empty() {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: "environment variable name must not be empty".to_string(),
		});
	}

	if let Some(pos) = name.find(|c: char| c.is_control()) {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: format!(
				"environment variable name contains control character at position {}",
				pos
			),
		});
	}

	if name.contains('=') {
		return Err(EnvError::InvalidVariableName {
			name: name.to_string(),
			reason: "environment variable name must not contain '='".to_string(),
		});
	}

	Ok(())
}

/// Environment variable errors
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("Missing environment variable: {0}")]
	MissingVariable(String),

	#[error("Failed to parse environment variable '{key}' (value length: {value_len}): {error}")]
	ParseError {
		key: String,
		value_len: usize,
		error: String,
	},

	#[error("Invalid environment variable name '{name}': {reason}")]
	InvalidVariableName { name: String, reason: String },
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	#[serial(env)]
	fn test_env_str_with_prefix() {
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("DCTEST_STR", "hello");
		}
		let env = Env::new().with_prefix("DCTEST_");
		assert_eq!(env.str("STR").unwrap(), "hello");
		// SAFETY: see above
		unsafe {
			env::remove_var("DCTEST_STR");
		}
	}

	#[rstest]
	fn test_env_defaults_when_unset() {
		let env = Env::new().with_prefix("DCTEST_UNSET_");

		assert_eq!(env.str_with_default("NAME", Some("fallback")).unwrap(), "fallback");
		assert!(env.bool_with_default("FLAG", Some(true)).unwrap());
		assert_eq!(env.int_with_default("COUNT", Some(7)).unwrap(), 7);
		assert_eq!(env.optional_int("COUNT").unwrap(), None);
		assert!(matches!(env.str("NAME"), Err(EnvError::MissingVariable(key)) if key == "DCTEST_UNSET_NAME"));
	}

	#[rstest]
	#[serial(env)]
	fn test_env_int_parse_error() {
		// SAFETY: serialized on the "env" key
		unsafe {
			env::set_var("DCTEST_BAD_INT", "many");
		}
		let env = Env::new().with_prefix("DCTEST_");
		let result = env.int("BAD_INT");
		// SAFETY: serialized on the "env" key
		unsafe {
			env::remove_var("DCTEST_BAD_INT");
		}
		assert!(matches!(result, Err(EnvError::ParseError { value_len: 4, .. })));
	}

	#[rstest]
	#[case("true", true)]
	#[case("Yes", true)]
	#[case("1", true)]
	#[case("off", false)]
	#[case("0", false)]
	fn test_parse_bool(#[case] input: &str, #[case] expected: bool) {
		assert_eq!(parse_bool(input).unwrap(), expected);
	}

	#[rstest]
	fn test_parse_bool_rejects_garbage() {
		assert!(parse_bool("maybe").is_err());
	}

	#[rstest]
	#[case("")]
	#[case("A=B")]
	#[case("A\nB")]
	fn test_invalid_names(#[case] name: &str) {
		assert!(matches!(
			validate_env_var_name(name),
			Err(EnvError::InvalidVariableName { .. })
		));
	}
}
