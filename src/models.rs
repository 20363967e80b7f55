//! Catalogue documents.

#[cfg(feature = "models")]
pub use datacat_models::*;
