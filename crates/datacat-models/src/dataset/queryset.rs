use datacat_db::{Filter, QuerySet};

use super::Dataset;
use crate::error::ModelResult;
use crate::owner::{Owner, owned_by_filter};

/// Queries over datasets
#[derive(Debug, Clone)]
pub struct DatasetQuerySet {
	inner: QuerySet<Dataset>,
}

impl DatasetQuerySet {
	pub(crate) fn new(inner: QuerySet<Dataset>) -> Self {
		Self { inner }
	}

	pub fn owned_by<I, O>(self, owners: I) -> Self
	where
		I: IntoIterator<Item = O>,
		O: Into<Owner>,
	{
		self.filter(owned_by_filter(owners.into_iter().map(Into::into)))
	}

	/// Public, non-deleted datasets
	pub fn visible(self) -> Self {
		self.filter(Filter::eq("private", false).and(Filter::is_null("deleted")))
	}

	pub fn filter(self, filter: Filter) -> Self {
		Self::new(self.inner.filter(filter))
	}

	pub async fn all(&self) -> ModelResult<Vec<Dataset>> {
		Ok(self.inner.all().await?)
	}

	pub async fn first(&self) -> ModelResult<Option<Dataset>> {
		Ok(self.inner.first().await?)
	}

	pub async fn count(&self) -> ModelResult<u64> {
		Ok(self.inner.count().await?)
	}
}
