use chrono::{DateTime, Utc};
use datacat_db::{Document, ObjectId};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ModelResult;
use crate::lifecycle;

/// Publishing organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
	pub id: ObjectId,
	pub name: String,
	pub slug: String,
	pub acronym: Option<String>,
	pub created_at: DateTime<Utc>,
}

impl Organization {
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			id: ObjectId::new(),
			slug: slug::slugify(&name),
			name,
			acronym: None,
			created_at: Utc::now(),
		}
	}

	/// Acronym when set, full name otherwise
	pub fn display_name(&self) -> &str {
		self.acronym.as_deref().unwrap_or(&self.name)
	}

	pub async fn get(catalog: &Catalog, id: ObjectId) -> ModelResult<Option<Self>> {
		Ok(catalog.db().get::<Self>(id).await?)
	}

	pub async fn save(&mut self, catalog: &Catalog) -> ModelResult<()> {
		lifecycle::upsert(catalog.db(), self).await?;
		Ok(())
	}
}

impl Document for Organization {
	const COLLECTION_NAME: &'static str = "organization";

	fn id(&self) -> Option<ObjectId> {
		Some(self.id)
	}

	fn set_id(&mut self, id: ObjectId) {
		self.id = id;
	}
}
