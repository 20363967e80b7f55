use chrono::{DateTime, Utc};
use datacat_db::{Document, Filter, ObjectId};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ModelResult;
use crate::lifecycle;
use crate::subject::SubjectRef;

/// A user following a document; active while `until` is unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follow {
	pub id: ObjectId,
	pub follower: ObjectId,
	pub following: SubjectRef,
	pub since: DateTime<Utc>,
	pub until: Option<DateTime<Utc>>,
}

impl Follow {
	pub fn new(follower: ObjectId, following: SubjectRef) -> Self {
		Self {
			id: ObjectId::new(),
			follower,
			following,
			since: Utc::now(),
			until: None,
		}
	}

	pub fn is_active(&self) -> bool {
		self.until.is_none()
	}

	pub fn unfollow(&mut self) {
		self.until = Some(Utc::now());
	}

	pub async fn save(&mut self, catalog: &Catalog) -> ModelResult<()> {
		lifecycle::upsert(catalog.db(), self).await?;
		Ok(())
	}

	/// Number of active follows of `subject`
	pub async fn count_active(catalog: &Catalog, subject: &SubjectRef) -> ModelResult<u64> {
		let filter = SubjectRef::filter("following", subject).and(Filter::is_null("until"));
		Ok(catalog.db().count::<Self>(&filter).await?)
	}
}

impl Document for Follow {
	const COLLECTION_NAME: &'static str = "follow";

	fn id(&self) -> Option<ObjectId> {
		Some(self.id)
	}

	fn set_id(&mut self, id: ObjectId) {
		self.id = id;
	}
}
