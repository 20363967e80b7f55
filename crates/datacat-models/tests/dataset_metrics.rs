//! Dataset reuse counters and their batch recomputation

use datacat_models::dataset::tasks::update_datasets_reuses_metrics;
use datacat_models::prelude::*;
use datacat_test::factories::{DatasetFactory, ReuseFactory, VisibleReuseFactory};
use datacat_test::fixtures::catalog;
use rstest::*;

#[rstest]
#[tokio::test]
async fn test_count_reuses_ignores_hidden_reuses(catalog: Catalog) {
	// Arrange
	let mut dataset = DatasetFactory::new().create(&catalog).await.unwrap();
	ReuseFactory::new().dataset(&dataset).create(&catalog).await.unwrap();
	ReuseFactory::new()
		.dataset(&dataset)
		.private(true)
		.create(&catalog)
		.await
		.unwrap();
	VisibleReuseFactory::new().create(&catalog).await.unwrap();

	// Act
	let count = dataset.count_reuses(&catalog).await.unwrap();

	// Assert
	assert_eq!(count, 1);
	assert_eq!(dataset.get_metrics()["reuses"], 1);
}

#[rstest]
#[tokio::test]
async fn test_batch_update_visits_every_dataset(catalog: Catalog) {
	// Arrange
	let linked = DatasetFactory::new().create(&catalog).await.unwrap();
	let unlinked = DatasetFactory::new().create(&catalog).await.unwrap();
	ReuseFactory::new().dataset(&linked).create(&catalog).await.unwrap();

	// Act
	let visited = update_datasets_reuses_metrics(&catalog).await.unwrap();

	// Assert
	assert_eq!(visited, 2);
	let linked = Dataset::get(&catalog, linked.id).await.unwrap().unwrap();
	let unlinked = Dataset::get(&catalog, unlinked.id).await.unwrap().unwrap();
	assert_eq!(linked.get_metrics()["reuses"], 1);
	assert_eq!(unlinked.get_metrics()["reuses"], 0);
}

#[rstest]
#[tokio::test]
async fn test_saving_an_older_copy_keeps_recomputed_reuses(catalog: Catalog) {
	// Arrange
	let mut dataset = DatasetFactory::new().create(&catalog).await.unwrap();
	ReuseFactory::new().dataset(&dataset).create(&catalog).await.unwrap();
	update_datasets_reuses_metrics(&catalog).await.unwrap();

	// Act
	dataset.title = "Renamed dataset".to_string();
	dataset.save(&catalog).await.unwrap();

	// Assert
	let stored = Dataset::get(&catalog, dataset.id).await.unwrap().unwrap();
	assert_eq!(stored.title, "Renamed dataset");
	assert_eq!(stored.get_metrics()["reuses"], 1);
	assert_eq!(dataset.get_metrics()["reuses"], 1);
}

#[rstest]
#[tokio::test]
async fn test_batch_update_on_empty_catalog(catalog: Catalog) {
	let visited = update_datasets_reuses_metrics(&catalog).await.unwrap();

	assert_eq!(visited, 0);
}

#[cfg(feature = "tasks")]
mod task_dispatch {
	use datacat_conf::Settings;
	use datacat_db::Database;
	use datacat_models::dataset::tasks::{UPDATE_DATASETS_REUSES_METRICS, register_tasks};
	use datacat_tasks::{ImmediateBackend, SerializedTask, TaskRegistry, TaskStatus};

	use super::*;

	#[rstest]
	#[tokio::test]
	async fn test_dispatch_registered_metrics_task(catalog: Catalog) {
		// Arrange
		let registry = TaskRegistry::new();
		register_tasks(&catalog, &registry).await;
		let dataset = DatasetFactory::new().create(&catalog).await.unwrap();
		ReuseFactory::new().dataset(&dataset).create(&catalog).await.unwrap();
		let backend = ImmediateBackend::default();

		// Act
		let run = backend
			.dispatch(&registry, &SerializedTask::new(UPDATE_DATASETS_REUSES_METRICS, "{}"))
			.await
			.unwrap();

		// Assert
		assert_eq!(run.status, TaskStatus::Success);
		assert_eq!(run.name, UPDATE_DATASETS_REUSES_METRICS);
		let dataset = Dataset::get(&catalog, dataset.id).await.unwrap().unwrap();
		assert_eq!(dataset.get_metrics()["reuses"], 1);
	}

	#[rstest]
	#[tokio::test]
	async fn test_catalog_backend_uses_configured_queue() {
		// Arrange
		let settings = Settings::from_toml_str("[tasks]\ndefault_queue = \"metrics\"\n").unwrap();
		let catalog = Catalog::new(Database::in_memory(), settings);
		let registry = TaskRegistry::new();
		register_tasks(&catalog, &registry).await;

		// Act
		let backend = catalog.task_backend();
		let run = backend
			.dispatch(&registry, &SerializedTask::new(UPDATE_DATASETS_REUSES_METRICS, "{}"))
			.await
			.unwrap();

		// Assert
		assert_eq!(backend.queue(), "metrics");
		assert_eq!(run.queue, "metrics");
		assert_eq!(run.status, TaskStatus::Success);
	}
}
