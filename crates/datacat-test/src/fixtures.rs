//! rstest fixtures

use datacat_models::{Catalog, Reuse};
use rstest::fixture;

use crate::logging::init_test_logging;

/// Fresh in-memory catalog with default settings
///
/// Each test gets its own store, signal registry and badge registries.
#[fixture]
pub fn catalog() -> Catalog {
	init_test_logging();
	Catalog::in_memory()
}

/// Catalog whose reuse badge registry also accepts `new`
#[fixture]
pub fn catalog_with_new_badge(catalog: Catalog) -> Catalog {
	catalog.badges::<Reuse>().register("new", "New");
	catalog
}
