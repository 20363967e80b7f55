//! Model factories
//!
//! Each factory builds an unsaved document with [`Factory::build`] and
//! persists it with `create`. A counter keeps generated titles and emails
//! unique within a test binary.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use datacat_db::ObjectId;
use datacat_models::prelude::*;

static SEQUENCE: AtomicUsize = AtomicUsize::new(1);

fn next_sequence() -> usize {
	SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// Factory trait for creating test data
pub trait Factory<T> {
	fn build(&self) -> T;

	fn build_batch(&self, count: usize) -> Vec<T> {
		(0..count).map(|_| self.build()).collect()
	}
}

#[derive(Debug, Clone, Default)]
pub struct UserFactory {
	first_name: Option<String>,
	email: Option<String>,
}

impl UserFactory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
		self.first_name = Some(first_name.into());
		self
	}

	pub fn email(mut self, email: impl Into<String>) -> Self {
		self.email = Some(email.into());
		self
	}

	pub async fn create(&self, catalog: &Catalog) -> ModelResult<User> {
		let mut user = self.build();
		user.save(catalog).await?;
		Ok(user)
	}
}

impl Factory<User> for UserFactory {
	fn build(&self) -> User {
		let n = next_sequence();
		User::new(
			self.first_name.clone().unwrap_or_else(|| format!("User{n}")),
			"Test",
			self.email.clone().unwrap_or_else(|| format!("user{n}@example.org")),
		)
	}
}

#[derive(Debug, Clone, Default)]
pub struct OrganizationFactory {
	name: Option<String>,
}

impl OrganizationFactory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub async fn create(&self, catalog: &Catalog) -> ModelResult<Organization> {
		let mut org = self.build();
		org.save(catalog).await?;
		Ok(org)
	}
}

impl Factory<Organization> for OrganizationFactory {
	fn build(&self) -> Organization {
		Organization::new(
			self.name
				.clone()
				.unwrap_or_else(|| format!("Organization {}", next_sequence())),
		)
	}
}

#[derive(Debug, Clone, Default)]
pub struct DatasetFactory {
	owner: Option<Owner>,
	private: bool,
	tags: Vec<String>,
}

impl DatasetFactory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn owner(mut self, owner: impl Into<Owner>) -> Self {
		self.owner = Some(owner.into());
		self
	}

	pub fn private(mut self, private: bool) -> Self {
		self.private = private;
		self
	}

	pub fn tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	pub async fn create(&self, catalog: &Catalog) -> ModelResult<Dataset> {
		let mut dataset = self.build();
		dataset.save(catalog).await?;
		Ok(dataset)
	}
}

impl Factory<Dataset> for DatasetFactory {
	fn build(&self) -> Dataset {
		let mut dataset = Dataset::new(format!("Dataset {}", next_sequence()));
		if let Some(owner) = self.owner {
			dataset.set_owner(owner);
		}
		dataset.private = self.private;
		dataset.set_tags(&self.tags);
		dataset
	}
}

/// Builds reuses linked only to the datasets given, so hidden by default
#[derive(Debug, Clone, Default)]
pub struct ReuseFactory {
	title: Option<String>,
	owner: Option<Owner>,
	tags: Vec<String>,
	reuse_type: Option<ReuseType>,
	topic: Option<ReuseTopic>,
	archived: Option<DateTime<Utc>>,
	private: bool,
	datasets: Vec<ObjectId>,
}

impl ReuseFactory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn owner(mut self, owner: impl Into<Owner>) -> Self {
		self.owner = Some(owner.into());
		self
	}

	pub fn organization(self, org: &Organization) -> Self {
		self.owner(org)
	}

	/// Raw tags, normalized when the reuse is built
	pub fn tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	pub fn reuse_type(mut self, reuse_type: ReuseType) -> Self {
		self.reuse_type = Some(reuse_type);
		self
	}

	pub fn topic(mut self, topic: ReuseTopic) -> Self {
		self.topic = Some(topic);
		self
	}

	pub fn archived(mut self, archived: DateTime<Utc>) -> Self {
		self.archived = Some(archived);
		self
	}

	pub fn private(mut self, private: bool) -> Self {
		self.private = private;
		self
	}

	pub fn dataset(mut self, dataset: &Dataset) -> Self {
		self.datasets.push(dataset.id);
		self
	}

	pub async fn create(&self, catalog: &Catalog) -> ModelResult<Reuse> {
		let mut reuse = self.build();
		reuse.save(catalog).await?;
		Ok(reuse)
	}
}

impl Factory<Reuse> for ReuseFactory {
	fn build(&self) -> Reuse {
		let title = self
			.title
			.clone()
			.unwrap_or_else(|| format!("Reuse {}", next_sequence()));
		let mut reuse = Reuse::new(title);
		if let Some(owner) = self.owner {
			reuse.set_owner(owner);
		}
		reuse.set_tags(&self.tags);
		if let Some(reuse_type) = self.reuse_type {
			reuse.reuse_type = reuse_type;
		}
		if let Some(topic) = self.topic {
			reuse.topic = topic;
		}
		reuse.archived = self.archived;
		reuse.private = self.private;
		reuse.datasets = self.datasets.clone();
		reuse
	}
}

/// Reuse factory that links a freshly created dataset, making it visible
#[derive(Debug, Clone, Default)]
pub struct VisibleReuseFactory {
	inner: ReuseFactory,
}

impl VisibleReuseFactory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn owner(mut self, owner: impl Into<Owner>) -> Self {
		self.inner = self.inner.owner(owner);
		self
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.inner = self.inner.title(title);
		self
	}

	pub async fn create(&self, catalog: &Catalog) -> ModelResult<Reuse> {
		let dataset = DatasetFactory::new().create(catalog).await?;
		self.inner.clone().dataset(&dataset).create(catalog).await
	}
}

#[derive(Debug, Clone)]
pub struct DiscussionFactory {
	subject: SubjectRef,
	user: Option<ObjectId>,
	closed: bool,
}

impl DiscussionFactory {
	pub fn new(subject: impl Into<SubjectRef>) -> Self {
		Self {
			subject: subject.into(),
			user: None,
			closed: false,
		}
	}

	pub fn user(mut self, user: &User) -> Self {
		self.user = Some(user.id);
		self
	}

	pub fn closed(mut self, closed: bool) -> Self {
		self.closed = closed;
		self
	}

	pub async fn create(&self, catalog: &Catalog) -> ModelResult<Discussion> {
		let mut discussion = self.build();
		discussion.save(catalog).await?;
		Ok(discussion)
	}
}

impl Factory<Discussion> for DiscussionFactory {
	fn build(&self) -> Discussion {
		let mut discussion = Discussion::new(
			self.subject.clone(),
			format!("Discussion {}", next_sequence()),
		);
		discussion.user = self.user;
		if self.closed {
			discussion.close(self.user);
		}
		discussion
	}
}
