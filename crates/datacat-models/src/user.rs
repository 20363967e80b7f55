use chrono::{DateTime, Utc};
use datacat_db::{Document, ObjectId};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ModelResult;
use crate::lifecycle;

/// Registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub id: ObjectId,
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub created_at: DateTime<Utc>,
}

impl User {
	pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, email: impl Into<String>) -> Self {
		Self {
			id: ObjectId::new(),
			first_name: first_name.into(),
			last_name: last_name.into(),
			email: email.into(),
			created_at: Utc::now(),
		}
	}

	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}

	pub async fn get(catalog: &Catalog, id: ObjectId) -> ModelResult<Option<Self>> {
		Ok(catalog.db().get::<Self>(id).await?)
	}

	pub async fn save(&mut self, catalog: &Catalog) -> ModelResult<()> {
		lifecycle::upsert(catalog.db(), self).await?;
		Ok(())
	}
}

impl Document for User {
	const COLLECTION_NAME: &'static str = "user";

	fn id(&self) -> Option<ObjectId> {
		Some(self.id)
	}

	fn set_id(&mut self, id: ObjectId) {
		self.id = id;
	}
}
