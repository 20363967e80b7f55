//! # datacat-tasks
//!
//! Named tasks that can be recreated from serialized data and run
//! out-of-band.
//!
//! - [`Task`] / [`TaskExecutor`]: a unit of work
//! - [`TaskFactory`] / [`TaskRegistry`]: name-based dispatch
//! - [`ImmediateBackend`]: runs tasks in-process and reports a [`TaskRun`]

pub mod backends;
pub mod error;
pub mod registry;
pub mod task;

pub use backends::{ImmediateBackend, TaskRun};
pub use error::{TaskError, TaskResult};
pub use registry::{SerializedTask, TaskFactory, TaskRegistry};
pub use task::{
	DEFAULT_TASK_QUEUE_NAME, TASK_MAX_PRIORITY, TASK_MIN_PRIORITY, Task, TaskExecutor, TaskId,
	TaskPriority, TaskStatus,
};
