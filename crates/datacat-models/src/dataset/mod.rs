//! Datasets and their reverse reuse metric

mod models;
mod queryset;
pub mod tasks;

pub use models::{Dataset, DatasetBadge, PIVOTAL_DATA, SPD};
pub use queryset::DatasetQuerySet;
