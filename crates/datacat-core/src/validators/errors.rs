use thiserror::Error;

/// Error raised when a field value does not satisfy its constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// Value is not one of the allowed choices
	#[error("Value '{value}' is not a valid choice for '{field}'")]
	InvalidChoice { field: String, value: String },

	/// Required value is missing
	#[error("Field '{field}' is required")]
	Required { field: String },

	/// Two or more fields that exclude each other are set together
	#[error("Fields {} are mutually exclusive", .fields.join(", "))]
	MutuallyExclusive { fields: Vec<String> },

	/// Any other constraint violation
	#[error("Invalid value for '{field}': {message}")]
	Invalid { field: String, message: String },
}

impl ValidationError {
	pub fn invalid_choice(field: impl Into<String>, value: impl Into<String>) -> Self {
		Self::InvalidChoice {
			field: field.into(),
			value: value.into(),
		}
	}

	pub fn required(field: impl Into<String>) -> Self {
		Self::Required {
			field: field.into(),
		}
	}

	pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::Invalid {
			field: field.into(),
			message: message.into(),
		}
	}

	/// Name of the offending field, or the first one for multi-field errors
	pub fn field(&self) -> &str {
		match self {
			Self::InvalidChoice { field, .. }
			| Self::Required { field }
			| Self::Invalid { field, .. } => field,
			Self::MutuallyExclusive { fields } => fields.first().map(String::as_str).unwrap_or(""),
		}
	}
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
