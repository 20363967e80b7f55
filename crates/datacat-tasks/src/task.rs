//! Task definitions

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TASK_QUEUE_NAME: &str = "default";
pub const TASK_MIN_PRIORITY: i32 = 0;
pub const TASK_MAX_PRIORITY: i32 = 9;

/// Unique identifier for a task
///
/// ```rust
/// use datacat_tasks::TaskId;
///
/// assert_ne!(TaskId::new(), TaskId::new());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub uuid::Uuid);

impl TaskId {
	pub fn new() -> Self {
		Self(uuid::Uuid::new_v4())
	}
}

impl Default for TaskId {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for TaskId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for TaskId {
	type Err = uuid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(uuid::Uuid::parse_str(s)?))
	}
}

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
	Pending,
	Running,
	Success,
	Failure,
}

impl TaskStatus {
	pub fn is_finished(&self) -> bool {
		matches!(self, Self::Success | Self::Failure)
	}
}

/// Task priority (0-9, where 9 is highest)
///
/// ```rust
/// use datacat_tasks::TaskPriority;
///
/// assert_eq!(TaskPriority::new(100).value(), 9);
/// assert_eq!(TaskPriority::new(-10).value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskPriority(i32);

impl TaskPriority {
	/// Create a new task priority, clamped to valid range (0-9)
	pub fn new(priority: i32) -> Self {
		Self(priority.clamp(TASK_MIN_PRIORITY, TASK_MAX_PRIORITY))
	}

	pub fn value(&self) -> i32 {
		self.0
	}
}

impl Default for TaskPriority {
	fn default() -> Self {
		Self(5)
	}
}

pub trait Task: Send + Sync {
	fn id(&self) -> TaskId;
	fn name(&self) -> &str;
	fn priority(&self) -> TaskPriority {
		TaskPriority::default()
	}
}

#[async_trait]
pub trait TaskExecutor: Task {
	async fn execute(&self) -> crate::TaskResult<()>;
}
