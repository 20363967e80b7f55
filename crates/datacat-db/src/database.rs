//! Typed facade over a document backend

use std::fmt;
use std::sync::Arc;

use super::backend::{DocumentBackend, FindOptions, RawDocument};
use super::document::{Document, ObjectId};
use super::error::{DbError, DbResult};
use super::filter::Filter;
use super::memory::MemoryBackend;
use super::queryset::QuerySet;

/// Handle to a document store
///
/// Cloning is cheap; clones share the same backend.
#[derive(Clone)]
pub struct Database {
	backend: Arc<dyn DocumentBackend>,
}

impl Database {
	pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
		Self { backend }
	}

	/// Database backed by a fresh [`MemoryBackend`]
	pub fn in_memory() -> Self {
		Self::new(Arc::new(MemoryBackend::new()))
	}

	pub fn backend(&self) -> &dyn DocumentBackend {
		self.backend.as_ref()
	}

	/// Start a query over documents of type `D`
	pub fn objects<D: Document>(&self) -> QuerySet<D> {
		QuerySet::new(self.clone())
	}

	/// Fetch a document by id
	pub async fn get<D: Document>(&self, id: ObjectId) -> DbResult<Option<D>> {
		self.find_one::<D>(&Filter::eq("id", id)).await
	}

	/// Fetch a document by id, failing when it does not exist
	pub async fn get_or_not_found<D: Document>(&self, id: ObjectId) -> DbResult<D> {
		self.get::<D>(id).await?.ok_or_else(|| DbError::NotFound {
			collection: D::COLLECTION_NAME.to_string(),
			id: id.to_string(),
		})
	}

	pub async fn find_one<D: Document>(&self, filter: &Filter) -> DbResult<Option<D>> {
		self.backend
			.find_one(D::COLLECTION_NAME, filter)
			.await?
			.map(from_raw::<D>)
			.transpose()
	}

	pub async fn find<D: Document>(&self, filter: &Filter, options: &FindOptions) -> DbResult<Vec<D>> {
		self.backend
			.find_many(D::COLLECTION_NAME, filter, options)
			.await?
			.into_iter()
			.map(from_raw::<D>)
			.collect()
	}

	pub async fn count<D: Document>(&self, filter: &Filter) -> DbResult<u64> {
		self.backend.count(D::COLLECTION_NAME, filter).await
	}

	/// Insert a document, assigning it a fresh id when it has none
	pub async fn insert<D: Document>(&self, document: &mut D) -> DbResult<ObjectId> {
		let id = match document.id() {
			Some(id) => id,
			None => {
				let id = ObjectId::new();
				document.set_id(id);
				id
			}
		};
		self.backend
			.insert_one(D::COLLECTION_NAME, id, to_raw(document)?)
			.await?;
		tracing::trace!(collection = D::COLLECTION_NAME, %id, "inserted document");
		Ok(id)
	}

	/// Replace the stored version of an already persisted document
	pub async fn replace<D: Document>(&self, document: &D) -> DbResult<()> {
		let id = require_id(document)?;
		let result = self
			.backend
			.replace_one(D::COLLECTION_NAME, id, to_raw(document)?)
			.await?;
		if result.matched_count == 0 {
			return Err(not_found::<D>(id));
		}
		tracing::trace!(collection = D::COLLECTION_NAME, %id, "replaced document");
		Ok(())
	}

	/// Overwrite only the given top-level fields of a stored document
	pub async fn update_fields<D: Document>(&self, id: ObjectId, fields: RawDocument) -> DbResult<()> {
		let result = self
			.backend
			.update_fields(D::COLLECTION_NAME, id, fields)
			.await?;
		if result.matched_count == 0 {
			return Err(not_found::<D>(id));
		}
		Ok(())
	}

	/// Re-read a document from the store
	pub async fn reload<D: Document>(&self, document: &D) -> DbResult<D> {
		let id = require_id(document)?;
		self.get_or_not_found::<D>(id).await
	}

	/// Delete a document by id. Returns whether something was removed.
	pub async fn delete<D: Document>(&self, id: ObjectId) -> DbResult<bool> {
		let deleted = self.backend.delete_one(D::COLLECTION_NAME, id).await?;
		Ok(deleted > 0)
	}

	/// Remove every document of type `D`
	pub async fn drop_collection<D: Document>(&self) -> DbResult<()> {
		self.backend.drop_collection(D::COLLECTION_NAME).await
	}
}

impl Default for Database {
	fn default() -> Self {
		Self::in_memory()
	}
}

impl fmt::Debug for Database {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Database")
			.field("backend", &self.backend.backend_name())
			.finish()
	}
}

fn require_id<D: Document>(document: &D) -> DbResult<ObjectId> {
	document.id().ok_or_else(|| DbError::MissingId {
		collection: D::COLLECTION_NAME.to_string(),
	})
}

fn not_found<D: Document>(id: ObjectId) -> DbError {
	DbError::NotFound {
		collection: D::COLLECTION_NAME.to_string(),
		id: id.to_string(),
	}
}

/// Serialize a document into its stored form
pub(crate) fn to_raw<D: Document>(document: &D) -> DbResult<RawDocument> {
	match serde_json::to_value(document)? {
		serde_json::Value::Object(map) => Ok(map),
		_ => Err(DbError::NotAnObject {
			collection: D::COLLECTION_NAME.to_string(),
		}),
	}
}

fn from_raw<D: Document>(raw: RawDocument) -> DbResult<D> {
	Ok(serde_json::from_value(serde_json::Value::Object(raw))?)
}
