//! Tag normalization.

#[cfg(feature = "taggit")]
pub use datacat_taggit::*;
