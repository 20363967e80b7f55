//! # datacat
//!
//! Document models for an open-data catalogue: reuses, datasets, their
//! owners, badges, tags and cached metrics.
//!
//! ## Feature Flags
//!
//! - `minimal` - Store, signals, validators and models
//! - `full` (default) - Everything, including background tasks and test utilities
//!
//! Fine-grained flags: `core`, `db`, `models`, `taggit`, `i18n`, `conf`,
//! `tasks`, `test`.
//!
//! ## Quick Example
//!
//! ```rust
//! use datacat::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ModelError> {
//! let catalog = Catalog::in_memory();
//!
//! let mut reuse = Reuse::new("Bus stops map");
//! reuse.set_tags(["Transport"]);
//! reuse.save(&catalog).await?;
//!
//! assert_eq!(Reuse::objects(&catalog).count().await?, 1);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "db")]
pub mod db;
#[cfg(feature = "i18n")]
pub mod i18n;
#[cfg(feature = "models")]
pub mod models;
#[cfg(feature = "taggit")]
pub mod taggit;
#[cfg(feature = "tasks")]
pub mod tasks;

#[cfg(feature = "conf")]
pub use datacat_conf::Settings;

#[cfg(feature = "core")]
pub use datacat_core::{Signal, SignalError, ValidationError, ValidationResult};

#[cfg(feature = "db")]
pub use datacat_db::{Database, DbError, Document, Filter, ObjectId, QuerySet};

#[cfg(feature = "models")]
pub use datacat_models::{Catalog, ModelError, ModelResult};

/// Common imports
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use datacat_conf::Settings;

	#[cfg(feature = "core")]
	pub use datacat_core::{Signal, ValidationError};

	#[cfg(feature = "db")]
	pub use datacat_db::{Database, Document, Filter, ObjectId};

	#[cfg(feature = "models")]
	pub use datacat_models::prelude::*;

	#[cfg(feature = "taggit")]
	pub use datacat_taggit::{TagConfig, Taggable};
}
