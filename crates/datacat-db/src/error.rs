//! Database error types

use thiserror::Error;

/// Errors raised by document store operations
#[derive(Debug, Error)]
pub enum DbError {
	/// No document with this id in the collection
	#[error("Document not found: {collection}#{id}")]
	NotFound { collection: String, id: String },

	/// Operation needs a persisted document but it has no id yet
	#[error("Document in '{collection}' has no id")]
	MissingId { collection: String },

	/// Insert with an id that is already taken
	#[error("Duplicate id in '{collection}': {id}")]
	DuplicateId { collection: String, id: String },

	/// Document could not be converted to or from its stored form
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Stored form is not a JSON object
	#[error("Document in '{collection}' is not an object")]
	NotAnObject { collection: String },

	/// Backend-specific failure
	#[error("Backend error: {0}")]
	Backend(String),
}

/// Result type for database operations
pub type DbResult<T> = std::result::Result<T, DbError>;
