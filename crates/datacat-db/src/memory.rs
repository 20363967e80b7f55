//! In-memory document backend

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::backend::{DocumentBackend, FindOptions, RawDocument, UpdateResult};
use super::document::ObjectId;
use super::error::{DbError, DbResult};
use super::filter::Filter;

type Collection = IndexMap<ObjectId, RawDocument>;

/// Process-local backend keeping collections in insertion order
#[derive(Debug, Default)]
pub struct MemoryBackend {
	collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Names of the collections holding at least one document
	pub fn collection_names(&self) -> Vec<String> {
		let collections = self.collections.read();
		let mut names: Vec<String> = collections
			.iter()
			.filter(|(_, docs)| !docs.is_empty())
			.map(|(name, _)| name.clone())
			.collect();
		names.sort();
		names
	}
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
	fn backend_name(&self) -> &'static str {
		"memory"
	}

	async fn find_one(&self, collection: &str, filter: &Filter) -> DbResult<Option<RawDocument>> {
		let collections = self.collections.read();
		Ok(collections
			.get(collection)
			.and_then(|docs| docs.values().find(|doc| filter.matches(doc)).cloned()))
	}

	async fn find_many(
		&self,
		collection: &str,
		filter: &Filter,
		options: &FindOptions,
	) -> DbResult<Vec<RawDocument>> {
		let collections = self.collections.read();
		let Some(docs) = collections.get(collection) else {
			return Ok(Vec::new());
		};
		let matching = docs
			.values()
			.filter(|doc| filter.matches(doc))
			.skip(options.skip)
			.cloned();
		Ok(match options.limit {
			Some(limit) => matching.take(limit).collect(),
			None => matching.collect(),
		})
	}

	async fn count(&self, collection: &str, filter: &Filter) -> DbResult<u64> {
		let collections = self.collections.read();
		Ok(collections
			.get(collection)
			.map(|docs| docs.values().filter(|doc| filter.matches(doc)).count() as u64)
			.unwrap_or(0))
	}

	async fn insert_one(&self, collection: &str, id: ObjectId, document: RawDocument) -> DbResult<()> {
		let mut collections = self.collections.write();
		let docs = collections.entry(collection.to_string()).or_default();
		if docs.contains_key(&id) {
			return Err(DbError::DuplicateId {
				collection: collection.to_string(),
				id: id.to_string(),
			});
		}
		docs.insert(id, document);
		Ok(())
	}

	async fn replace_one(
		&self,
		collection: &str,
		id: ObjectId,
		document: RawDocument,
	) -> DbResult<UpdateResult> {
		let mut collections = self.collections.write();
		let Some(stored) = collections.get_mut(collection).and_then(|docs| docs.get_mut(&id)) else {
			return Ok(UpdateResult::default());
		};
		let modified = *stored != document;
		*stored = document;
		Ok(UpdateResult {
			matched_count: 1,
			modified_count: u64::from(modified),
		})
	}

	async fn update_fields(
		&self,
		collection: &str,
		id: ObjectId,
		fields: RawDocument,
	) -> DbResult<UpdateResult> {
		let mut collections = self.collections.write();
		let Some(stored) = collections.get_mut(collection).and_then(|docs| docs.get_mut(&id)) else {
			return Ok(UpdateResult::default());
		};
		let mut modified = false;
		for (key, value) in fields {
			if stored.get(&key) != Some(&value) {
				modified = true;
				stored.insert(key, value);
			}
		}
		Ok(UpdateResult {
			matched_count: 1,
			modified_count: u64::from(modified),
		})
	}

	async fn delete_one(&self, collection: &str, id: ObjectId) -> DbResult<u64> {
		let mut collections = self.collections.write();
		Ok(collections
			.get_mut(collection)
			.and_then(|docs| docs.shift_remove(&id))
			.map(|_| 1)
			.unwrap_or(0))
	}

	async fn drop_collection(&self, collection: &str) -> DbResult<()> {
		self.collections.write().remove(collection);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::{Value, json};

	fn raw(value: Value) -> RawDocument {
		match value {
			Value::Object(map) => map,
			_ => panic!("expected an object"),
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_insert_rejects_duplicate_id() {
		// Arrange
		let backend = MemoryBackend::new();
		let id = ObjectId::new();
		backend.insert_one("reuse", id, raw(json!({"n": 1}))).await.unwrap();

		// Act
		let result = backend.insert_one("reuse", id, raw(json!({"n": 2}))).await;

		// Assert
		assert!(matches!(result, Err(DbError::DuplicateId { .. })));
	}

	#[rstest]
	#[tokio::test]
	async fn test_find_many_keeps_insertion_order_with_skip_and_limit() {
		// Arrange
		let backend = MemoryBackend::new();
		for n in 0..5 {
			backend
				.insert_one("dataset", ObjectId::new(), raw(json!({"n": n})))
				.await
				.unwrap();
		}

		// Act
		let docs = backend
			.find_many("dataset", &Filter::All, &FindOptions::new().skip(1).limit(2))
			.await
			.unwrap();

		// Assert
		let ns: Vec<_> = docs.iter().map(|d| d["n"].clone()).collect();
		assert_eq!(ns, vec![json!(1), json!(2)]);
	}

	#[rstest]
	#[tokio::test]
	async fn test_update_fields_only_touches_given_fields() {
		// Arrange
		let backend = MemoryBackend::new();
		let id = ObjectId::new();
		backend
			.insert_one("reuse", id, raw(json!({"title": "a", "metrics": {}})))
			.await
			.unwrap();

		// Act
		let result = backend
			.update_fields("reuse", id, raw(json!({"metrics": {"datasets": 2}})))
			.await
			.unwrap();
		let unchanged = backend
			.update_fields("reuse", id, raw(json!({"metrics": {"datasets": 2}})))
			.await
			.unwrap();

		// Assert
		assert_eq!(result, UpdateResult { matched_count: 1, modified_count: 1 });
		assert_eq!(unchanged.modified_count, 0);
		let stored = backend.find_one("reuse", &Filter::All).await.unwrap().unwrap();
		assert_eq!(stored["title"], json!("a"));
		assert_eq!(stored["metrics"]["datasets"], json!(2));
	}

	#[rstest]
	#[tokio::test]
	async fn test_replace_and_delete_missing_document() {
		// Arrange
		let backend = MemoryBackend::new();

		// Act
		let replaced = backend
			.replace_one("reuse", ObjectId::new(), RawDocument::new())
			.await
			.unwrap();
		let deleted = backend.delete_one("reuse", ObjectId::new()).await.unwrap();

		// Assert
		assert_eq!(replaced.matched_count, 0);
		assert_eq!(deleted, 0);
	}

	#[rstest]
	#[tokio::test]
	async fn test_drop_collection() {
		// Arrange
		let backend = MemoryBackend::new();
		backend
			.insert_one("follow", ObjectId::new(), RawDocument::new())
			.await
			.unwrap();
		backend
			.insert_one("user", ObjectId::new(), RawDocument::new())
			.await
			.unwrap();

		// Act
		backend.drop_collection("follow").await.unwrap();

		// Assert
		assert_eq!(backend.collection_names(), vec!["user".to_string()]);
		assert_eq!(backend.count("follow", &Filter::All).await.unwrap(), 0);
	}
}
