use chrono::{DateTime, Utc};
use datacat_core::signals::model_signals;
use datacat_core::{Signal, ValidationError, ValidationResult};
use datacat_db::{Document, ObjectId};
use datacat_taggit::Taggable;
use serde::{Deserialize, Serialize};

use super::{ReuseBadge, ReuseQuerySet, ReuseTopic, ReuseType};
use crate::badges::{self, Badged, validate_badge};
use crate::catalog::Catalog;
use crate::discussion::Discussion;
use crate::error::ModelResult;
use crate::follow::Follow;
use crate::lifecycle::{self, Transition, null_as_false};
use crate::metrics::{self, Metrics};
use crate::owner::Owner;
use crate::subject::SubjectRef;

/// A cataloged application, analysis or article consuming datasets
///
/// Field assignment never persists anything; call [`Reuse::save`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reuse {
	pub id: ObjectId,
	pub title: String,
	#[serde(default)]
	pub slug: String,
	#[serde(default)]
	pub description: String,
	pub url: Option<String>,
	#[serde(rename = "type")]
	pub reuse_type: ReuseType,
	pub topic: ReuseTopic,
	pub owner: Option<ObjectId>,
	pub organization: Option<ObjectId>,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub datasets: Vec<ObjectId>,
	#[serde(default)]
	pub badges: Vec<ReuseBadge>,
	#[serde(default, deserialize_with = "null_as_false")]
	pub private: bool,
	#[serde(default)]
	pub featured: bool,
	pub archived: Option<DateTime<Utc>>,
	pub deleted: Option<DateTime<Utc>>,
	#[serde(default)]
	pub metrics: Metrics,
	pub created_at: DateTime<Utc>,
	pub last_modified: DateTime<Utc>,
}

impl Reuse {
	pub fn new(title: impl Into<String>) -> Self {
		let now = Utc::now();
		Self {
			id: ObjectId::new(),
			title: title.into(),
			slug: String::new(),
			description: String::new(),
			url: None,
			reuse_type: ReuseType::default(),
			topic: ReuseTopic::default(),
			owner: None,
			organization: None,
			tags: Vec::new(),
			datasets: Vec::new(),
			badges: Vec::new(),
			private: false,
			featured: false,
			archived: None,
			deleted: None,
			metrics: Metrics::new(),
			created_at: now,
			last_modified: now,
		}
	}

	pub fn objects(catalog: &Catalog) -> ReuseQuerySet {
		ReuseQuerySet::new(catalog.db().objects::<Self>())
	}

	pub async fn get(catalog: &Catalog, id: ObjectId) -> ModelResult<Option<Self>> {
		Ok(catalog.db().get::<Self>(id).await?)
	}

	pub fn on_create(catalog: &Catalog) -> Signal<Self> {
		model_signals::on_create(catalog.signals())
	}

	pub fn on_update(catalog: &Catalog) -> Signal<Self> {
		model_signals::on_update(catalog.signals())
	}

	pub fn on_delete(catalog: &Catalog) -> Signal<Self> {
		model_signals::on_delete(catalog.signals())
	}

	pub fn after_save(catalog: &Catalog) -> Signal<Self> {
		model_signals::after_save(catalog.signals())
	}

	pub fn on_badge_added(catalog: &Catalog) -> Signal<Self> {
		model_signals::on_badge_added(catalog.signals())
	}

	pub fn on_badge_removed(catalog: &Catalog) -> Signal<Self> {
		model_signals::on_badge_removed(catalog.signals())
	}

	/// Owner identity, user first
	pub fn ownership(&self) -> Option<Owner> {
		self.owner
			.map(Owner::User)
			.or(self.organization.map(Owner::Organization))
	}

	/// Set the owner, clearing the other ownership field
	pub fn set_owner(&mut self, owner: impl Into<Owner>) {
		match owner.into() {
			Owner::User(id) => {
				self.owner = Some(id);
				self.organization = None;
			}
			Owner::Organization(id) => {
				self.organization = Some(id);
				self.owner = None;
			}
		}
	}

	/// `None` resets to public
	pub fn set_private(&mut self, private: impl Into<Option<bool>>) {
		self.private = private.into().unwrap_or(false);
	}

	pub fn type_label(&self) -> String {
		self.reuse_type.label()
	}

	pub fn topic_label(&self) -> String {
		self.topic.label()
	}

	pub fn is_visible(&self) -> bool {
		!self.private && self.deleted.is_none() && !self.datasets.is_empty()
	}

	pub fn is_hidden(&self) -> bool {
		!self.is_visible()
	}

	pub fn subject(&self) -> SubjectRef {
		SubjectRef::new::<Self>(self.id)
	}

	pub fn validate(&self, catalog: &Catalog) -> ValidationResult<()> {
		if self.title.trim().is_empty() {
			return Err(ValidationError::required("title"));
		}
		if self.owner.is_some() && self.organization.is_some() {
			return Err(ValidationError::MutuallyExclusive {
				fields: vec!["owner".to_string(), "organization".to_string()],
			});
		}
		for badge in &self.badges {
			validate_badge::<Self>(catalog, badge)?;
		}
		Ok(())
	}

	fn clean(&mut self, catalog: &Catalog) {
		self.clean_tags(catalog.tag_config());
		if self.slug.is_empty() {
			self.slug = slug::slugify(&self.title);
		}
		self.last_modified = Utc::now();
	}

	/// Validate and persist, then emit lifecycle signals
	///
	/// `on_create` fires for a first save and `on_update` for every later
	/// one. `on_delete` fires when this save sets `deleted` on a document
	/// whose stored version had none. Changing `datasets` drops the cached
	/// `datasets` metric.
	pub async fn save(&mut self, catalog: &Catalog) -> ModelResult<()> {
		self.validate(catalog)?;
		self.clean(catalog);

		let db = catalog.db();
		let previous = lifecycle::stored(db, self).await?;
		if let Some(previous) = &previous {
			// Counters are only written through `metrics::store`
			self.metrics = previous.metrics.clone();
			if previous.datasets != self.datasets {
				self.metrics.remove(metrics::DATASETS);
			}
		}
		let transition = Transition {
			created: previous.is_none(),
			deleted: self.deleted.is_some()
				&& previous.as_ref().is_none_or(|p| p.deleted.is_none()),
		};
		lifecycle::write(db, self, !transition.created).await?;
		tracing::debug!(
			reuse = %self.id,
			created = transition.created,
			deleted = transition.deleted,
			"saved reuse"
		);

		lifecycle::emit(catalog, self, transition).await
	}

	/// Replace this value with its stored version
	pub async fn reload(&mut self, catalog: &Catalog) -> ModelResult<()> {
		*self = catalog.db().reload(self).await?;
		Ok(())
	}

	/// Remove the document from the store
	pub async fn delete(self, catalog: &Catalog) -> ModelResult<bool> {
		Ok(catalog.db().delete::<Self>(self.id).await?)
	}

	pub fn get_metrics(&self) -> &Metrics {
		&self.metrics
	}

	pub async fn count_datasets(&mut self, catalog: &Catalog) -> ModelResult<u64> {
		let count = self.datasets.len() as u64;
		self.store_metric(catalog, metrics::DATASETS, count).await?;
		Ok(count)
	}

	/// Count open discussions about this reuse
	pub async fn count_discussions(&mut self, catalog: &Catalog) -> ModelResult<u64> {
		let count = Discussion::count_open(catalog, &self.subject()).await?;
		self.store_metric(catalog, metrics::DISCUSSIONS, count).await?;
		Ok(count)
	}

	pub async fn count_followers(&mut self, catalog: &Catalog) -> ModelResult<u64> {
		let count = Follow::count_active(catalog, &self.subject()).await?;
		self.store_metric(catalog, metrics::FOLLOWERS, count).await?;
		Ok(count)
	}

	async fn store_metric(&mut self, catalog: &Catalog, name: &str, count: u64) -> ModelResult<()> {
		self.metrics.insert(name.to_string(), count);
		metrics::store::<Self>(catalog, self.id, &self.metrics).await?;
		tracing::debug!(reuse = %self.id, metric = name, count, "updated reuse metric");
		Ok(())
	}

	pub async fn add_badge(&mut self, catalog: &Catalog, kind: &str) -> ModelResult<ReuseBadge> {
		badges::add_badge(catalog, self, kind, None).await
	}

	pub async fn remove_badge(&mut self, catalog: &Catalog, kind: &str) -> ModelResult<bool> {
		badges::remove_badge(catalog, self, kind).await
	}
}

impl Document for Reuse {
	const COLLECTION_NAME: &'static str = "reuse";

	fn id(&self) -> Option<ObjectId> {
		Some(self.id)
	}

	fn set_id(&mut self, id: ObjectId) {
		self.id = id;
	}
}

impl Taggable for Reuse {
	fn tags(&self) -> &[String] {
		&self.tags
	}

	fn tags_mut(&mut self) -> &mut Vec<String> {
		&mut self.tags
	}
}

impl Badged for Reuse {
	type Badge = ReuseBadge;

	fn default_badge_kinds() -> &'static [(&'static str, &'static str)] {
		&[]
	}

	fn badges(&self) -> &[ReuseBadge] {
		&self.badges
	}

	fn badges_mut(&mut self) -> &mut Vec<ReuseBadge> {
		&mut self.badges
	}
}

impl From<&Reuse> for SubjectRef {
	fn from(reuse: &Reuse) -> Self {
		reuse.subject()
	}
}
