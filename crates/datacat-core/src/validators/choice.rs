//! Validator for values restricted to a set of codes

use super::Validator;
use super::errors::{ValidationError, ValidationResult};
use indexmap::IndexMap;

/// Validates that a value is one of a set of codes, each with a label
///
/// Choices keep their insertion order and may be extended after creation.
///
/// ```
/// use datacat_core::validators::{ChoiceValidator, Validator};
///
/// let mut validator = ChoiceValidator::new("kind", [("spd", "Reference data")]);
/// assert!(validator.validate("spd").is_ok());
/// assert!(validator.validate("new").is_err());
///
/// validator.add_choice("new", "New");
/// assert!(validator.validate("new").is_ok());
/// assert_eq!(validator.label("new"), Some("New"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceValidator {
	field: String,
	choices: IndexMap<String, String>,
}

impl ChoiceValidator {
	pub fn new<I, K, V>(field: impl Into<String>, choices: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			field: field.into(),
			choices: choices
				.into_iter()
				.map(|(code, label)| (code.into(), label.into()))
				.collect(),
		}
	}

	/// Field name reported in validation errors
	pub fn field(&self) -> &str {
		&self.field
	}

	/// Add or relabel a choice. Returns true when the code was new.
	pub fn add_choice(&mut self, code: impl Into<String>, label: impl Into<String>) -> bool {
		self.choices.insert(code.into(), label.into()).is_none()
	}

	/// Remove a choice, returning its label
	pub fn remove_choice(&mut self, code: &str) -> Option<String> {
		self.choices.shift_remove(code)
	}

	pub fn contains(&self, code: &str) -> bool {
		self.choices.contains_key(code)
	}

	pub fn label(&self, code: &str) -> Option<&str> {
		self.choices.get(code).map(String::as_str)
	}

	/// Allowed codes in insertion order
	pub fn codes(&self) -> impl Iterator<Item = &str> {
		self.choices.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.choices.len()
	}

	pub fn is_empty(&self) -> bool {
		self.choices.is_empty()
	}
}

impl Validator<str> for ChoiceValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if self.contains(value) {
			Ok(())
		} else {
			Err(ValidationError::invalid_choice(&self.field, value))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_rejects_unknown_code_with_field_name() {
		// Arrange
		let validator = ChoiceValidator::new("type", [("api", "API")]);

		// Act
		let err = validator.validate("doesnotexist").unwrap_err();

		// Assert
		assert_eq!(err, ValidationError::invalid_choice("type", "doesnotexist"));
		assert_eq!(err.field(), "type");
	}

	#[rstest]
	fn test_add_choice_reports_novelty_and_keeps_order() {
		// Arrange
		let mut validator = ChoiceValidator::new("kind", Vec::<(String, String)>::new());

		// Act
		let first = validator.add_choice("b", "B");
		let second = validator.add_choice("a", "A");
		let relabel = validator.add_choice("b", "Bee");

		// Assert
		assert!(first && second);
		assert!(!relabel);
		assert_eq!(validator.codes().collect::<Vec<_>>(), vec!["b", "a"]);
		assert_eq!(validator.label("b"), Some("Bee"));
	}

	#[rstest]
	fn test_remove_choice() {
		// Arrange
		let mut validator = ChoiceValidator::new("kind", [("a", "A"), ("b", "B")]);

		// Act
		let removed = validator.remove_choice("a");

		// Assert
		assert_eq!(removed.as_deref(), Some("A"));
		assert!(validator.validate("a").is_err());
		assert_eq!(validator.len(), 1);
	}
}
