//! Field validators
//!
//! Validation errors are surfaced to the caller as [`ValidationError`] and are
//! never recovered locally.

pub mod choice;
pub mod errors;

pub use choice::ChoiceValidator;
pub use errors::{ValidationError, ValidationResult};

/// Trait for validators
pub trait Validator<T: ?Sized> {
	fn validate(&self, value: &T) -> ValidationResult<()>;
}
