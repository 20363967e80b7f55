use chrono::{DateTime, Utc};
use datacat_db::{Document, Filter, ObjectId};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ModelResult;
use crate::lifecycle;
use crate::subject::SubjectRef;

/// Discussion thread attached to a reuse or a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
	pub id: ObjectId,
	pub subject: SubjectRef,
	pub title: String,
	pub user: Option<ObjectId>,
	pub created: DateTime<Utc>,
	pub closed: Option<DateTime<Utc>>,
	pub closed_by: Option<ObjectId>,
}

impl Discussion {
	pub fn new(subject: SubjectRef, title: impl Into<String>) -> Self {
		Self {
			id: ObjectId::new(),
			subject,
			title: title.into(),
			user: None,
			created: Utc::now(),
			closed: None,
			closed_by: None,
		}
	}

	pub fn is_open(&self) -> bool {
		self.closed.is_none()
	}

	pub fn close(&mut self, by: Option<ObjectId>) {
		self.closed = Some(Utc::now());
		self.closed_by = by;
	}

	pub async fn save(&mut self, catalog: &Catalog) -> ModelResult<()> {
		lifecycle::upsert(catalog.db(), self).await?;
		Ok(())
	}

	/// Number of open discussions about `subject`
	pub async fn count_open(catalog: &Catalog, subject: &SubjectRef) -> ModelResult<u64> {
		let filter = SubjectRef::filter("subject", subject).and(Filter::is_null("closed"));
		Ok(catalog.db().count::<Self>(&filter).await?)
	}
}

impl Document for Discussion {
	const COLLECTION_NAME: &'static str = "discussion";

	fn id(&self) -> Option<ObjectId> {
		Some(self.id)
	}

	fn set_id(&mut self, id: ObjectId) {
		self.id = id;
	}
}
