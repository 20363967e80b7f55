use thiserror::Error;

/// Errors raised by task creation and execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
	#[error("Task not registered: {0}")]
	NotRegistered(String),

	#[error("Task execution failed: {0}")]
	ExecutionFailed(String),

	#[error("Task serialization failed: {0}")]
	SerializationError(String),
}

impl From<serde_json::Error> for TaskError {
	fn from(error: serde_json::Error) -> Self {
		Self::SerializationError(error.to_string())
	}
}

pub type TaskResult<T> = Result<T, TaskError>;
