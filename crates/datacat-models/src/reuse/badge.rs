use chrono::{DateTime, Utc};
use datacat_core::ValidationResult;
use datacat_db::ObjectId;
use serde::{Deserialize, Serialize};

use super::Reuse;
use crate::badges::{Badge, validate_badge};
use crate::catalog::Catalog;

/// Badge attached to a [`Reuse`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReuseBadge {
	pub kind: String,
	pub created: DateTime<Utc>,
	pub created_by: Option<ObjectId>,
}

impl ReuseBadge {
	/// Check `kind` against the catalog's reuse badge registry
	pub fn validate(&self, catalog: &Catalog) -> ValidationResult<()> {
		validate_badge::<Reuse>(catalog, self)
	}
}

impl Badge for ReuseBadge {
	fn new(kind: impl Into<String>, created_by: Option<ObjectId>) -> Self {
		Self {
			kind: kind.into(),
			created: Utc::now(),
			created_by,
		}
	}

	fn kind(&self) -> &str {
		&self.kind
	}

	fn created(&self) -> DateTime<Utc> {
		self.created
	}
}
