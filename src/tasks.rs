//! Background tasks module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use datacat::tasks::{ImmediateBackend, TaskRegistry};
//! ```

#[cfg(feature = "tasks")]
pub use datacat_tasks::*;
