//! Name-based task dispatch

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{TaskError, TaskExecutor, TaskResult};

/// Task name plus the JSON payload its factory consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedTask {
	name: String,
	data: String,
}

impl SerializedTask {
	pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			data: data.into(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &str {
		&self.data
	}

	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Creates task executors from serialized data
#[async_trait]
pub trait TaskFactory: Send + Sync {
	async fn create(&self, data: &str) -> TaskResult<Box<dyn TaskExecutor>>;
}

/// Mapping of task names to their factories
///
/// Cloning shares the underlying map.
#[derive(Clone)]
pub struct TaskRegistry {
	factories: Arc<RwLock<HashMap<String, Arc<dyn TaskFactory>>>>,
}

impl TaskRegistry {
	pub fn new() -> Self {
		Self {
			factories: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	/// Register a task factory, replacing any previous one under `name`
	pub async fn register(&self, name: impl Into<String>, factory: Arc<dyn TaskFactory>) {
		let name = name.into();
		tracing::debug!(task = %name, "registering task factory");
		let mut factories = self.factories.write().await;
		factories.insert(name, factory);
	}

	/// Returns whether a factory was removed
	pub async fn unregister(&self, name: &str) -> bool {
		let mut factories = self.factories.write().await;
		factories.remove(name).is_some()
	}

	pub async fn has(&self, name: &str) -> bool {
		let factories = self.factories.read().await;
		factories.contains_key(name)
	}

	/// Create a task executor from serialized data
	pub async fn create(&self, name: &str, data: &str) -> TaskResult<Box<dyn TaskExecutor>> {
		let factory = {
			let factories = self.factories.read().await;
			factories
				.get(name)
				.cloned()
				.ok_or_else(|| TaskError::NotRegistered(name.to_string()))?
		};

		factory.create(data).await
	}

	pub async fn create_serialized(&self, task: &SerializedTask) -> TaskResult<Box<dyn TaskExecutor>> {
		self.create(task.name(), task.data()).await
	}

	/// Registered task names, sorted
	pub async fn list(&self) -> Vec<String> {
		let factories = self.factories.read().await;
		let mut names: Vec<String> = factories.keys().cloned().collect();
		names.sort();
		names
	}
}

impl Default for TaskRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Task, TaskId};
	use rstest::rstest;

	struct NoopTask {
		id: TaskId,
	}

	impl Task for NoopTask {
		fn id(&self) -> TaskId {
			self.id
		}

		fn name(&self) -> &str {
			"noop"
		}
	}

	#[async_trait]
	impl TaskExecutor for NoopTask {
		async fn execute(&self) -> TaskResult<()> {
			Ok(())
		}
	}

	struct NoopFactory;

	#[async_trait]
	impl TaskFactory for NoopFactory {
		async fn create(&self, _data: &str) -> TaskResult<Box<dyn TaskExecutor>> {
			Ok(Box::new(NoopTask { id: TaskId::new() }))
		}
	}

	#[rstest]
	fn test_serialized_task_json() {
		let task = SerializedTask::new("noop", r#"{"key":"value"}"#);

		let restored = SerializedTask::from_json(&task.to_json().unwrap()).unwrap();

		assert_eq!(restored, task);
	}

	#[rstest]
	#[tokio::test]
	async fn test_registry_register_and_unregister() {
		let registry = TaskRegistry::new();
		assert!(!registry.has("noop").await);

		registry.register("noop", Arc::new(NoopFactory)).await;
		assert!(registry.has("noop").await);
		assert_eq!(registry.list().await, vec!["noop".to_string()]);

		assert!(registry.unregister("noop").await);
		assert!(!registry.unregister("noop").await);
	}

	#[rstest]
	#[tokio::test]
	async fn test_create_unknown_task() {
		let registry = TaskRegistry::new();

		let result = registry.create("missing", "{}").await;

		assert!(matches!(result, Err(TaskError::NotRegistered(name)) if name == "missing"));
	}
}
