//! Message translation.

#[cfg(feature = "i18n")]
pub use datacat_i18n::*;
