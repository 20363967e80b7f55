//! ImmediateBackend dispatch tests

use async_trait::async_trait;
use datacat_tasks::{
	ImmediateBackend, SerializedTask, Task, TaskError, TaskExecutor, TaskFactory, TaskId,
	TaskRegistry, TaskResult, TaskStatus,
};
use rstest::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingTask {
	id: TaskId,
	counter: Arc<AtomicUsize>,
	fail: bool,
}

impl Task for CountingTask {
	fn id(&self) -> TaskId {
		self.id
	}

	fn name(&self) -> &str {
		"counting"
	}
}

#[async_trait]
impl TaskExecutor for CountingTask {
	async fn execute(&self) -> TaskResult<()> {
		self.counter.fetch_add(1, Ordering::SeqCst);
		if self.fail {
			return Err(TaskError::ExecutionFailed("boom".to_string()));
		}
		Ok(())
	}
}

struct CountingFactory {
	counter: Arc<AtomicUsize>,
}

#[async_trait]
impl TaskFactory for CountingFactory {
	async fn create(&self, data: &str) -> TaskResult<Box<dyn TaskExecutor>> {
		let payload: serde_json::Value = serde_json::from_str(data)?;
		Ok(Box::new(CountingTask {
			id: TaskId::new(),
			counter: self.counter.clone(),
			fail: payload["fail"].as_bool().unwrap_or(false),
		}))
	}
}

#[fixture]
fn counter() -> Arc<AtomicUsize> {
	Arc::new(AtomicUsize::new(0))
}

#[rstest]
#[tokio::test]
async fn test_dispatch_runs_registered_task(counter: Arc<AtomicUsize>) {
	// Arrange
	let registry = TaskRegistry::new();
	registry
		.register("counting", Arc::new(CountingFactory { counter: counter.clone() }))
		.await;
	let backend = ImmediateBackend::default();

	// Act
	let run = backend
		.dispatch(&registry, &SerializedTask::new("counting", "{}"))
		.await
		.unwrap();

	// Assert
	assert_eq!(run.status, TaskStatus::Success);
	assert_eq!(run.queue, "default");
	assert!(run.error.is_none());
	assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn test_failure_is_reported_in_run(counter: Arc<AtomicUsize>) {
	let registry = TaskRegistry::new();
	registry
		.register("counting", Arc::new(CountingFactory { counter: counter.clone() }))
		.await;

	let run = ImmediateBackend::new("metrics")
		.dispatch(&registry, &SerializedTask::new("counting", r#"{"fail":true}"#))
		.await
		.unwrap();

	assert_eq!(run.status, TaskStatus::Failure);
	assert!(run.status.is_finished());
	assert_eq!(run.error.as_deref(), Some("Task execution failed: boom"));
}

#[rstest]
#[tokio::test]
async fn test_bad_payload_fails_creation(counter: Arc<AtomicUsize>) {
	let registry = TaskRegistry::new();
	registry
		.register("counting", Arc::new(CountingFactory { counter: counter.clone() }))
		.await;

	let result = ImmediateBackend::default()
		.dispatch(&registry, &SerializedTask::new("counting", "not json"))
		.await;

	assert!(matches!(result, Err(TaskError::SerializationError(_))));
	assert_eq!(counter.load(Ordering::SeqCst), 0);
}
