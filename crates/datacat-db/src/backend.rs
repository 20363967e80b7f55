//! Document-oriented storage trait
//!
//! Backends store documents as JSON objects grouped in named collections and
//! keyed by [`ObjectId`]. Every call is atomic on its own.

use async_trait::async_trait;

use super::document::ObjectId;
use super::error::DbResult;
use super::filter::Filter;

/// Stored form of a document
pub type RawDocument = serde_json::Map<String, serde_json::Value>;

/// Options for multi-document queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
	pub limit: Option<usize>,
	pub skip: usize,
}

impl FindOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn skip(mut self, skip: usize) -> Self {
		self.skip = skip;
		self
	}
}

/// Outcome of an update or replace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
	pub matched_count: u64,
	pub modified_count: u64,
}

/// Trait for document-oriented stores
///
/// # Example
///
/// ```rust,ignore
/// use datacat_db::{DocumentBackend, Filter};
///
/// async fn count_private(db: &dyn DocumentBackend) -> DbResult<u64> {
///     db.count("reuse", &Filter::eq("private", true)).await
/// }
/// ```
#[async_trait]
pub trait DocumentBackend: Send + Sync {
	/// Short backend name used in logs
	fn backend_name(&self) -> &'static str;

	/// Find a single document matching the filter
	async fn find_one(&self, collection: &str, filter: &Filter) -> DbResult<Option<RawDocument>>;

	/// Find every document matching the filter, in insertion order
	async fn find_many(
		&self,
		collection: &str,
		filter: &Filter,
		options: &FindOptions,
	) -> DbResult<Vec<RawDocument>>;

	/// Count documents matching the filter
	async fn count(&self, collection: &str, filter: &Filter) -> DbResult<u64>;

	/// Insert a new document under `id`
	async fn insert_one(&self, collection: &str, id: ObjectId, document: RawDocument) -> DbResult<()>;

	/// Replace the whole document stored under `id`
	async fn replace_one(
		&self,
		collection: &str,
		id: ObjectId,
		document: RawDocument,
	) -> DbResult<UpdateResult>;

	/// Overwrite the given top-level fields of the document stored under `id`
	async fn update_fields(
		&self,
		collection: &str,
		id: ObjectId,
		fields: RawDocument,
	) -> DbResult<UpdateResult>;

	/// Delete the document stored under `id`, returning how many were removed
	async fn delete_one(&self, collection: &str, id: ObjectId) -> DbResult<u64>;

	/// Remove every document of the collection
	async fn drop_collection(&self, collection: &str) -> DbResult<()>;
}
