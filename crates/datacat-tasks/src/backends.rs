//! In-process task execution

use serde::{Deserialize, Serialize};

use crate::{
	DEFAULT_TASK_QUEUE_NAME, SerializedTask, TaskExecutor, TaskId, TaskRegistry, TaskResult,
	TaskStatus,
};

/// Outcome of a task run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRun {
	pub task_id: TaskId,
	pub name: String,
	pub queue: String,
	pub status: TaskStatus,
	pub error: Option<String>,
}

/// Runs tasks immediately on the calling task
///
/// Execution errors are captured in the returned [`TaskRun`] rather than
/// propagated.
#[derive(Debug, Clone)]
pub struct ImmediateBackend {
	queue: String,
}

impl ImmediateBackend {
	pub fn new(queue: impl Into<String>) -> Self {
		Self {
			queue: queue.into(),
		}
	}

	pub fn queue(&self) -> &str {
		&self.queue
	}

	pub async fn run(&self, task: &dyn TaskExecutor) -> TaskRun {
		let task_id = task.id();
		tracing::info!(task = task.name(), %task_id, queue = %self.queue, "running task");
		let (status, error) = match task.execute().await {
			Ok(()) => (TaskStatus::Success, None),
			Err(e) => {
				tracing::warn!(task = task.name(), %task_id, error = %e, "task failed");
				(TaskStatus::Failure, Some(e.to_string()))
			}
		};
		TaskRun {
			task_id,
			name: task.name().to_string(),
			queue: self.queue.clone(),
			status,
			error,
		}
	}

	/// Build a task through `registry` and run it
	///
	/// Fails only when the task cannot be created.
	pub async fn dispatch(&self, registry: &TaskRegistry, task: &SerializedTask) -> TaskResult<TaskRun> {
		let executor = registry.create_serialized(task).await?;
		Ok(self.run(executor.as_ref()).await)
	}
}

impl Default for ImmediateBackend {
	fn default() -> Self {
		Self::new(DEFAULT_TASK_QUEUE_NAME)
	}
}
