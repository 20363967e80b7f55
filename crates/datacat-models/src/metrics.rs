//! Denormalized counters stored on documents

use std::collections::BTreeMap;

use datacat_db::{Document, ObjectId, RawDocument};

use crate::catalog::Catalog;
use crate::error::ModelResult;

/// Metric name to count
pub type Metrics = BTreeMap<String, u64>;

pub const DATASETS: &str = "datasets";
pub const DISCUSSIONS: &str = "discussions";
pub const FOLLOWERS: &str = "followers";
pub const REUSES: &str = "reuses";

/// Overwrite the stored `metrics` field of document `id`
///
/// Only that field is written and no lifecycle signal fires.
pub(crate) async fn store<M: Document>(catalog: &Catalog, id: ObjectId, metrics: &Metrics) -> ModelResult<()> {
	let mut fields = RawDocument::new();
	fields.insert("metrics".to_string(), serde_json::to_value(metrics)?);
	catalog.db().update_fields::<M>(id, fields).await?;
	Ok(())
}
