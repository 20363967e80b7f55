use datacat_db::{Filter, QuerySet};

use super::Reuse;
use crate::error::ModelResult;
use crate::owner::{Owner, owned_by_filter};

/// Queries over reuses
#[derive(Debug, Clone)]
pub struct ReuseQuerySet {
	inner: QuerySet<Reuse>,
}

impl ReuseQuerySet {
	pub(crate) fn new(inner: QuerySet<Reuse>) -> Self {
		Self { inner }
	}

	/// Filter matching public, non-deleted reuses with at least one dataset
	pub fn visible_filter() -> Filter {
		Filter::eq("private", false)
			.and(Filter::is_null("deleted"))
			.and(Filter::not_empty("datasets"))
	}

	/// Reuses owned by any of `owners`, users or organizations
	pub fn owned_by<I, O>(self, owners: I) -> Self
	where
		I: IntoIterator<Item = O>,
		O: Into<Owner>,
	{
		self.filter(owned_by_filter(owners.into_iter().map(Into::into)))
	}

	pub fn visible(self) -> Self {
		self.filter(Self::visible_filter())
	}

	pub fn hidden(self) -> Self {
		self.exclude(Self::visible_filter())
	}

	pub fn filter(self, filter: Filter) -> Self {
		Self::new(self.inner.filter(filter))
	}

	pub fn exclude(self, filter: Filter) -> Self {
		Self::new(self.inner.exclude(filter))
	}

	pub fn limit(self, limit: usize) -> Self {
		Self::new(self.inner.limit(limit))
	}

	pub async fn all(&self) -> ModelResult<Vec<Reuse>> {
		Ok(self.inner.all().await?)
	}

	pub async fn first(&self) -> ModelResult<Option<Reuse>> {
		Ok(self.inner.first().await?)
	}

	pub async fn count(&self) -> ModelResult<u64> {
		Ok(self.inner.count().await?)
	}

	pub async fn exists(&self) -> ModelResult<bool> {
		Ok(self.inner.exists().await?)
	}

	pub fn into_inner(self) -> QuerySet<Reuse> {
		self.inner
	}
}
