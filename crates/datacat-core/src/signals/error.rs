use thiserror::Error;

/// Error raised by a signal receiver or by signal configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Signal error: {message}")]
pub struct SignalError {
	/// Human-readable failure description
	pub message: String,
}

impl SignalError {
	/// Create a new signal error
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}
