//! Signals and validators.

#[cfg(feature = "core")]
pub use datacat_core::*;
