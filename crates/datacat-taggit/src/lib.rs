//! # datacat-taggit
//!
//! Tag normalization for datacat documents, inspired by django-taggit.
//!
//! - [`Normalizer`]: turns a raw tag into its canonical slug
//! - [`DefaultNormalizer`]: `slug`-based normalizer with length bounds
//! - [`TagConfig`]: normalization settings
//! - [`Taggable`]: trait for documents carrying a normalized tag list
//!
//! ## Quick Start
//!
//! ```rust
//! use datacat_taggit::{normalize_tags, TagConfig};
//!
//! let tags = normalize_tags(["Open Data", "open-data!", "Bus stops"], &TagConfig::default());
//! assert_eq!(tags, vec!["open-data", "bus-stops"]);
//! ```

pub mod config;
pub mod error;
pub mod normalizer;
pub mod taggable;

pub use config::{TagConfig, TagConfigBuilder};
pub use error::{Result, TaggitError};
pub use normalizer::{DefaultNormalizer, Normalizer, normalize_tags};
pub use taggable::Taggable;

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::config::TagConfig;
	pub use crate::error::{Result, TaggitError};
	pub use crate::normalizer::{DefaultNormalizer, Normalizer, normalize_tags};
	pub use crate::taggable::Taggable;
}
