use chrono::{DateTime, Utc};
use datacat_core::signals::model_signals;
use datacat_core::{Signal, ValidationError, ValidationResult};
use datacat_db::{Document, Filter, ObjectId};
use datacat_taggit::Taggable;
use serde::{Deserialize, Serialize};

use super::DatasetQuerySet;
use crate::badges::{self, Badge, Badged, validate_badge};
use crate::catalog::Catalog;
use crate::discussion::Discussion;
use crate::error::ModelResult;
use crate::lifecycle::{self, Transition, null_as_false};
use crate::metrics::{self, Metrics};
use crate::owner::Owner;
use crate::reuse::Reuse;
use crate::subject::SubjectRef;

pub const PIVOTAL_DATA: &str = "pivotal-data";
pub const SPD: &str = "spd";

/// Published dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
	pub id: ObjectId,
	pub title: String,
	#[serde(default)]
	pub slug: String,
	#[serde(default)]
	pub description: String,
	pub owner: Option<ObjectId>,
	pub organization: Option<ObjectId>,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub badges: Vec<DatasetBadge>,
	#[serde(default, deserialize_with = "null_as_false")]
	pub private: bool,
	pub archived: Option<DateTime<Utc>>,
	pub deleted: Option<DateTime<Utc>>,
	#[serde(default)]
	pub metrics: Metrics,
	pub created_at: DateTime<Utc>,
	pub last_modified: DateTime<Utc>,
}

/// Badge attached to a [`Dataset`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetBadge {
	pub kind: String,
	pub created: DateTime<Utc>,
	pub created_by: Option<ObjectId>,
}

impl DatasetBadge {
	pub fn validate(&self, catalog: &Catalog) -> ValidationResult<()> {
		validate_badge::<Dataset>(catalog, self)
	}
}

impl Badge for DatasetBadge {
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

impl Dataset {
	pub fn new(title: impl Into<String>) -> Self {
		let now = Utc::now();
		Self {
			id: ObjectId::new(),
			title: title.into(),
			slug: String::new(),
			description: String::new(),
			owner: None,
			organization: None,
			tags: Vec::new(),
			badges: Vec::new(),
			private: false,
			archived: None,
			deleted: None,
			metrics: Metrics::new(),
			created_at: now,
			last_modified: now,
		}
	}

	pub fn objects(catalog: &Catalog) -> DatasetQuerySet {
		DatasetQuerySet::new(catalog.db().objects::<Self>())
	}

	pub async fn get(catalog: &Catalog, id: ObjectId) -> ModelResult<Option<Self>> {
		Ok(catalog.db().get::<Self>(id).await?)
	}

	pub fn on_update(catalog: &Catalog) -> Signal<Self> {
		model_signals::on_update(catalog.signals())
	}

	pub fn on_delete(catalog: &Catalog) -> Signal<Self> {
		model_signals::on_delete(catalog.signals())
	}

	pub fn on_badge_added(catalog: &Catalog) -> Signal<Self> {
		model_signals::on_badge_added(catalog.signals())
	}

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

	pub fn set_private(&mut self, private: impl Into<Option<bool>>) {
		self.private = private.into().unwrap_or(false);
	}

	pub fn is_visible(&self) -> bool {
		!self.private && self.deleted.is_none()
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

	/// Validate and persist, then emit lifecycle signals
	pub async fn save(&mut self, catalog: &Catalog) -> ModelResult<()> {
		self.validate(catalog)?;
		self.clean_tags(catalog.tag_config());
		if self.slug.is_empty() {
			self.slug = slug::slugify(&self.title);
		}
		self.last_modified = Utc::now();

		let db = catalog.db();
		let previous = lifecycle::stored(db, self).await?;
		if let Some(previous) = &previous {
			// Counters are only written through `metrics::store`
			self.metrics = previous.metrics.clone();
		}
		let transition = Transition {
			created: previous.is_none(),
			deleted: self.deleted.is_some()
				&& previous.as_ref().is_none_or(|p| p.deleted.is_none()),
		};
		lifecycle::write(db, self, !transition.created).await?;
		tracing::debug!(dataset = %self.id, created = transition.created, "saved dataset");

		lifecycle::emit(catalog, self, transition).await
	}

	pub async fn reload(&mut self, catalog: &Catalog) -> ModelResult<()> {
		*self = catalog.db().reload(self).await?;
		Ok(())
	}

	pub fn get_metrics(&self) -> &Metrics {
		&self.metrics
	}

	/// Count visible reuses referencing this dataset
	pub async fn count_reuses(&mut self, catalog: &Catalog) -> ModelResult<u64> {
		let count = Reuse::objects(catalog)
			.visible()
			.filter(Filter::contains("datasets", self.id))
			.count()
			.await?;
		self.store_metric(catalog, metrics::REUSES, count).await?;
		Ok(count)
	}

	pub async fn count_discussions(&mut self, catalog: &Catalog) -> ModelResult<u64> {
		let count = Discussion::count_open(catalog, &self.subject()).await?;
		self.store_metric(catalog, metrics::DISCUSSIONS, count).await?;
		Ok(count)
	}

	async fn store_metric(&mut self, catalog: &Catalog, name: &str, count: u64) -> ModelResult<()> {
		self.metrics.insert(name.to_string(), count);
		metrics::store::<Self>(catalog, self.id, &self.metrics).await?;
		tracing::debug!(dataset = %self.id, metric = name, count, "updated dataset metric");
		Ok(())
	}

	pub async fn add_badge(&mut self, catalog: &Catalog, kind: &str) -> ModelResult<DatasetBadge> {
		badges::add_badge(catalog, self, kind, None).await
	}

	pub async fn remove_badge(&mut self, catalog: &Catalog, kind: &str) -> ModelResult<bool> {
		badges::remove_badge(catalog, self, kind).await
	}
}

impl Document for Dataset {
	const COLLECTION_NAME: &'static str = "dataset";

	fn id(&self) -> Option<ObjectId> {
		Some(self.id)
	}

	fn set_id(&mut self, id: ObjectId) {
		self.id = id;
	}
}

impl Taggable for Dataset {
	fn tags(&self) -> &[String] {
		&self.tags
	}

	fn tags_mut(&mut self) -> &mut Vec<String> {
		&mut self.tags
	}
}

impl Badged for Dataset {
	type Badge = DatasetBadge;

	fn default_badge_kinds() -> &'static [(&'static str, &'static str)] {
		&[(PIVOTAL_DATA, "Pivotal data"), (SPD, "Reference data")]
	}

	fn badges(&self) -> &[DatasetBadge] {
		&self.badges
	}

	fn badges_mut(&mut self) -> &mut Vec<DatasetBadge> {
		&mut self.badges
	}
}

impl From<&Dataset> for SubjectRef {
	fn from(dataset: &Dataset) -> Self {
		dataset.subject()
	}
}
