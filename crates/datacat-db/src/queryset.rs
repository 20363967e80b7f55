//! Chainable queries over a collection

use std::fmt;
use std::marker::PhantomData;

use super::backend::FindOptions;
use super::database::Database;
use super::document::Document;
use super::error::DbResult;
use super::filter::Filter;

/// Lazily evaluated query over documents of type `D`
///
/// Filters accumulate as a conjunction; nothing runs until a terminal method
/// (`all`, `first`, `count`, `exists`) is awaited.
pub struct QuerySet<D: Document> {
	db: Database,
	filter: Filter,
	options: FindOptions,
	_marker: PhantomData<fn() -> D>,
}

impl<D: Document> QuerySet<D> {
	pub fn new(db: Database) -> Self {
		Self {
			db,
			filter: Filter::All,
			options: FindOptions::default(),
			_marker: PhantomData,
		}
	}

	/// Narrow the query with another filter
	pub fn filter(mut self, filter: Filter) -> Self {
		self.filter = self.filter.and(filter);
		self
	}

	/// Exclude documents matching `filter`
	pub fn exclude(self, filter: Filter) -> Self {
		self.filter(Filter::Not(Box::new(filter)))
	}

	pub fn limit(mut self, limit: usize) -> Self {
		self.options.limit = Some(limit);
		self
	}

	pub fn skip(mut self, skip: usize) -> Self {
		self.options.skip = skip;
		self
	}

	/// Filter accumulated so far
	pub fn as_filter(&self) -> &Filter {
		&self.filter
	}

	pub fn database(&self) -> &Database {
		&self.db
	}

	pub async fn all(&self) -> DbResult<Vec<D>> {
		self.db.find::<D>(&self.filter, &self.options).await
	}

	pub async fn first(&self) -> DbResult<Option<D>> {
		let options = FindOptions {
			limit: Some(1),
			skip: self.options.skip,
		};
		Ok(self.db.find::<D>(&self.filter, &options).await?.into_iter().next())
	}

	/// Count matching documents, ignoring limit and skip
	pub async fn count(&self) -> DbResult<u64> {
		self.db.count::<D>(&self.filter).await
	}

	pub async fn exists(&self) -> DbResult<bool> {
		Ok(self.count().await? > 0)
	}
}

impl<D: Document> Clone for QuerySet<D> {
	fn clone(&self) -> Self {
		Self {
			db: self.db.clone(),
			filter: self.filter.clone(),
			options: self.options.clone(),
			_marker: PhantomData,
		}
	}
}

impl<D: Document> fmt::Debug for QuerySet<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("QuerySet")
			.field("collection", &D::COLLECTION_NAME)
			.field("filter", &self.filter)
			.field("options", &self.options)
			.finish()
	}
}
