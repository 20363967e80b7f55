//! # datacat-core
//!
//! Core components shared by the datacat crates:
//!
//! - [`signals`]: typed publish/subscribe signals used for model lifecycle
//!   events (`on_create`, `on_update`, `on_delete`, badge events)
//! - [`validators`]: field validation errors and the choice validator used by
//!   enumerated fields and badge kinds

pub mod signals;
pub mod validators;

pub use signals::{Signal, SignalError, SignalName, SignalRegistry};
pub use validators::{ChoiceValidator, ValidationError, ValidationResult, Validator};
