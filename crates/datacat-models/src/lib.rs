//! # datacat-models
//!
//! Catalogue documents built on `datacat-db`.
//!
//! Every operation takes a [`Catalog`], the context holding the store,
//! settings, signal registry and badge registries. The central document is
//! [`Reuse`]: an application or analysis built on [`Dataset`]s, owned by a
//! [`User`] or an [`Organization`], with normalized tags, denormalized
//! metrics and badges.
//!
//! ## Quick Start
//!
//! ```
//! use datacat_models::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ModelResult<()> {
//! let catalog = Catalog::in_memory();
//! let mut user = User::new("Ada", "Lovelace", "ada@example.org");
//! user.save(&catalog).await?;
//!
//! let mut reuse = Reuse::new("Bus stops map");
//! reuse.set_owner(&user);
//! reuse.set_tags(["Transport", "transport!", "Bus"]);
//! reuse.save(&catalog).await?;
//!
//! let owned = Reuse::objects(&catalog).owned_by([&user]).all().await?;
//! assert_eq!(owned.len(), 1);
//! assert_eq!(owned[0].tags, vec!["transport", "bus"]);
//! # Ok(())
//! # }
//! ```

pub mod badges;
pub mod catalog;
pub mod dataset;
pub mod discussion;
pub mod error;
pub mod follow;
mod lifecycle;
pub mod metrics;
pub mod organization;
pub mod owner;
pub mod reuse;
pub mod subject;
pub mod user;

pub use badges::{Badge, BadgeRegistry, Badged};
pub use catalog::Catalog;
pub use dataset::{Dataset, DatasetBadge, DatasetQuerySet};
pub use discussion::Discussion;
pub use error::{ModelError, ModelResult};
pub use follow::Follow;
pub use metrics::Metrics;
pub use organization::Organization;
pub use owner::Owner;
pub use reuse::{Reuse, ReuseBadge, ReuseQuerySet, ReuseTopic, ReuseType};
pub use subject::SubjectRef;
pub use user::User;

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::badges::{Badge, Badged};
	pub use crate::catalog::Catalog;
	pub use crate::dataset::{Dataset, DatasetBadge};
	pub use crate::discussion::Discussion;
	pub use crate::error::{ModelError, ModelResult};
	pub use crate::follow::Follow;
	pub use crate::organization::Organization;
	pub use crate::owner::Owner;
	pub use crate::reuse::{Reuse, ReuseBadge, ReuseTopic, ReuseType};
	pub use crate::subject::SubjectRef;
	pub use crate::user::User;
	pub use datacat_taggit::Taggable;
}
