//! Batch recomputation of dataset metrics

use crate::catalog::Catalog;
use crate::dataset::Dataset;
use crate::error::ModelResult;

/// Registered name of [`update_datasets_reuses_metrics`]
pub const UPDATE_DATASETS_REUSES_METRICS: &str = "update-datasets-reuses-metrics";

/// Recompute the `reuses` metric of every dataset
///
/// Returns the number of datasets visited.
pub async fn update_datasets_reuses_metrics(catalog: &Catalog) -> ModelResult<usize> {
	let datasets = Dataset::objects(catalog).all().await?;
	let total = datasets.len();
	for mut dataset in datasets {
		dataset.count_reuses(catalog).await?;
	}
	tracing::info!(datasets = total, "updated datasets reuses metrics");
	Ok(total)
}

#[cfg(feature = "tasks")]
pub use self::executor::{UpdateDatasetsReusesMetrics, UpdateDatasetsReusesMetricsFactory, register_tasks};

#[cfg(feature = "tasks")]
mod executor {
	use std::sync::Arc;

	use async_trait::async_trait;
	use datacat_tasks::{
		Task, TaskError, TaskExecutor, TaskFactory, TaskId, TaskPriority, TaskRegistry, TaskResult,
	};

	use super::{UPDATE_DATASETS_REUSES_METRICS, update_datasets_reuses_metrics};
	use crate::catalog::Catalog;

	/// [`update_datasets_reuses_metrics`] as a runnable task
	pub struct UpdateDatasetsReusesMetrics {
		id: TaskId,
		catalog: Catalog,
	}

	impl UpdateDatasetsReusesMetrics {
		pub fn new(catalog: Catalog) -> Self {
			Self {
				id: TaskId::new(),
				catalog,
			}
		}
	}

	impl Task for UpdateDatasetsReusesMetrics {
		fn id(&self) -> TaskId {
			self.id
		}

		fn name(&self) -> &str {
			UPDATE_DATASETS_REUSES_METRICS
		}

		fn priority(&self) -> TaskPriority {
			TaskPriority::new(2)
		}
	}

	#[async_trait]
	impl TaskExecutor for UpdateDatasetsReusesMetrics {
		async fn execute(&self) -> TaskResult<()> {
			update_datasets_reuses_metrics(&self.catalog)
				.await
				.map(|_| ())
				.map_err(|e| TaskError::ExecutionFailed(e.to_string()))
		}
	}

	/// Builds the task for a fixed catalog; the payload is ignored
	pub struct UpdateDatasetsReusesMetricsFactory {
		catalog: Catalog,
	}

	impl UpdateDatasetsReusesMetricsFactory {
		pub fn new(catalog: Catalog) -> Self {
			Self { catalog }
		}
	}

	#[async_trait]
	impl TaskFactory for UpdateDatasetsReusesMetricsFactory {
		async fn create(&self, _data: &str) -> TaskResult<Box<dyn TaskExecutor>> {
			Ok(Box::new(UpdateDatasetsReusesMetrics::new(self.catalog.clone())))
		}
	}

	/// Register the dataset tasks of `catalog` in `registry`
	pub async fn register_tasks(catalog: &Catalog, registry: &TaskRegistry) {
		registry
			.register(
				UPDATE_DATASETS_REUSES_METRICS,
				Arc::new(UpdateDatasetsReusesMetricsFactory::new(catalog.clone())),
			)
			.await;
	}
}
