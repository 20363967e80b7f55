use datacat_core::{SignalError, ValidationError};
use datacat_db::DbError;
use datacat_i18n::I18nError;
use thiserror::Error;

/// Errors raised by model operations
#[derive(Debug, Error)]
pub enum ModelError {
	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error(transparent)]
	Db(#[from] DbError),

	#[error("Signal receiver failed: {0}")]
	Signal(#[from] SignalError),

	#[error(transparent)]
	I18n(#[from] I18nError),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl ModelError {
	pub fn is_validation(&self) -> bool {
		matches!(self, Self::Validation(_))
	}
}

pub type ModelResult<T> = Result<T, ModelError>;
