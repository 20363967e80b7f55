use thiserror::Error;

/// Errors raised while assembling translation contexts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
	/// Locale identifier is empty or malformed
	#[error("Invalid locale: {0:?}")]
	InvalidLocale(String),

	/// Catalog was registered under a locale it does not declare
	#[error("Catalog locale mismatch: registered as {expected}, catalog declares {actual}")]
	LocaleMismatch { expected: String, actual: String },
}

pub type Result<T> = std::result::Result<T, I18nError>;
