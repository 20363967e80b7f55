//! # datacat-db
//!
//! Document-oriented persistence for datacat models.
//!
//! - [`Document`]: trait implemented by every persisted model
//! - [`Filter`]: query predicates evaluated against stored JSON documents
//! - [`DocumentBackend`]: async storage trait, with [`MemoryBackend`] as the
//!   bundled implementation
//! - [`Database`]: typed facade over a backend, and [`QuerySet`] for chained
//!   queries
//!
//! ## Quick Start
//!
//! ```
//! use datacat_db::{Database, Document, Filter, ObjectId};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Note {
//!     id: Option<ObjectId>,
//!     title: String,
//! }
//!
//! impl Document for Note {
//!     const COLLECTION_NAME: &'static str = "note";
//!     fn id(&self) -> Option<ObjectId> { self.id }
//!     fn set_id(&mut self, id: ObjectId) { self.id = Some(id); }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> datacat_db::DbResult<()> {
//! let db = Database::in_memory();
//! let mut note = Note { id: None, title: "hello".into() };
//! db.insert(&mut note).await?;
//!
//! let found = db.objects::<Note>().filter(Filter::eq("title", "hello")).all().await?;
//! assert_eq!(found.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod database;
pub mod document;
pub mod error;
pub mod filter;
pub mod memory;
pub mod queryset;

pub use backend::{DocumentBackend, FindOptions, RawDocument, UpdateResult};
pub use database::Database;
pub use document::{Document, ObjectId};
pub use error::{DbError, DbResult};
pub use filter::Filter;
pub use memory::MemoryBackend;
pub use queryset::QuerySet;
