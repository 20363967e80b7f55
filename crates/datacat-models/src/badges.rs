//! Badges: labeled annotations whose kinds come from a runtime registry
//!
//! Each badged model owns a [`BadgeRegistry`] inside the [`Catalog`],
//! seeded with the model's default kinds. Plugins extend it with
//! [`BadgeRegistry::register`]; validation always checks the current set.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use datacat_core::signals::model_signals;
use datacat_core::{ChoiceValidator, ValidationResult, Validator};
use datacat_db::{Document, ObjectId, RawDocument};
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::catalog::Catalog;
use crate::error::ModelResult;

/// Extensible set of allowed badge kinds
///
/// Clones share the same set.
#[derive(Debug, Clone)]
pub struct BadgeRegistry {
	kinds: Arc<RwLock<ChoiceValidator>>,
}

impl BadgeRegistry {
	pub fn new<'a, I>(kinds: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		Self {
			kinds: Arc::new(RwLock::new(ChoiceValidator::new("kind", kinds))),
		}
	}

	/// Allow `kind`, returns false if it was already allowed
	pub fn register(&self, kind: impl Into<String>, label: impl Into<String>) -> bool {
		let kind = kind.into();
		let added = self.kinds.write().add_choice(kind.clone(), label);
		if added {
			tracing::debug!(kind = %kind, "registered badge kind");
		}
		added
	}

	pub fn unregister(&self, kind: &str) -> bool {
		self.kinds.write().remove_choice(kind).is_some()
	}

	pub fn contains(&self, kind: &str) -> bool {
		self.kinds.read().contains(kind)
	}

	pub fn label(&self, kind: &str) -> Option<String> {
		self.kinds.read().label(kind).map(str::to_string)
	}

	pub fn kinds(&self) -> Vec<String> {
		self.kinds.read().codes().map(str::to_string).collect()
	}

	pub fn len(&self) -> usize {
		self.kinds.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.read().is_empty()
	}

	/// Fails with an invalid choice error when `kind` is not registered
	pub fn validate(&self, kind: &str) -> ValidationResult<()> {
		self.kinds.read().validate(kind)
	}
}

/// Badge sub-document
pub trait Badge: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
	fn new(kind: impl Into<String>, created_by: Option<ObjectId>) -> Self;

	fn kind(&self) -> &str;

	fn created(&self) -> DateTime<Utc>;
}

/// Document carrying a list of badges
pub trait Badged: Document {
	type Badge: Badge;

	/// `(kind, label)` pairs every catalog starts with
	fn default_badge_kinds() -> &'static [(&'static str, &'static str)];

	fn badges(&self) -> &[Self::Badge];

	fn badges_mut(&mut self) -> &mut Vec<Self::Badge>;

	fn get_badge(&self, kind: &str) -> Option<&Self::Badge> {
		self.badges().iter().find(|b| b.kind() == kind)
	}
}

/// Validate a badge against the registry of `M`
pub fn validate_badge<M: Badged>(catalog: &Catalog, badge: &M::Badge) -> ValidationResult<()> {
	catalog.badges::<M>().validate(badge.kind())
}

async fn persist_badges<M: Badged>(catalog: &Catalog, doc: &M) -> ModelResult<()> {
	let id = doc.id().ok_or_else(|| datacat_db::DbError::MissingId {
		collection: M::COLLECTION_NAME.to_string(),
	})?;
	let mut fields = RawDocument::new();
	fields.insert("badges".to_string(), serde_json::to_value(doc.badges())?);
	catalog.db().update_fields::<M>(id, fields).await?;
	Ok(())
}

/// Attach a badge of `kind` to a stored document
///
/// Adding a kind that is already present returns the existing badge and
/// emits nothing. Otherwise the badge list is persisted and
/// `on_badge_added` fires.
pub async fn add_badge<M: Badged>(
	catalog: &Catalog,
	doc: &mut M,
	kind: &str,
	created_by: Option<ObjectId>,
) -> ModelResult<M::Badge> {
	if let Some(existing) = doc.get_badge(kind) {
		return Ok(existing.clone());
	}
	let badge = M::Badge::new(kind, created_by);
	validate_badge::<M>(catalog, &badge)?;

	doc.badges_mut().push(badge.clone());
	persist_badges(catalog, doc).await?;
	tracing::debug!(collection = M::COLLECTION_NAME, kind, "badge added");

	model_signals::on_badge_added::<M>(catalog.signals())
		.send(doc.clone())
		.await?;
	Ok(badge)
}

/// Detach the badge of `kind`, returns whether one was removed
pub async fn remove_badge<M: Badged>(catalog: &Catalog, doc: &mut M, kind: &str) -> ModelResult<bool> {
	let before = doc.badges().len();
	doc.badges_mut().retain(|b| b.kind() != kind);
	if doc.badges().len() == before {
		return Ok(false);
	}
	persist_badges(catalog, doc).await?;
	tracing::debug!(collection = M::COLLECTION_NAME, kind, "badge removed");

	model_signals::on_badge_removed::<M>(catalog.signals())
		.send(doc.clone())
		.await?;
	Ok(true)
}
