//! # datacat-test
//!
//! Testing utilities for datacat models.
//!
//! - [`factories`]: builders that persist ready-made documents
//! - [`assertions`]: [`EmitRecorder`] and [`assert_emit`] for signals
//! - [`fixtures`]: rstest fixtures such as [`catalog`](fixtures::catalog)
//! - [`logging`]: one-time `tracing` subscriber setup
//!
//! ```rust,ignore
//! use datacat_models::Reuse;
//! use datacat_test::{assert_emit, factories::ReuseFactory, fixtures::catalog};
//!
//! #[rstest]
//! #[tokio::test]
//! async fn test_delete_signal(catalog: Catalog) {
//!     let mut reuse = ReuseFactory::new().create(&catalog).await.unwrap();
//!     reuse.deleted = Some(chrono::Utc::now());
//!     assert_emit(&Reuse::on_delete(&catalog), reuse.save(&catalog)).await.unwrap();
//! }
//! ```

pub mod assertions;
pub mod factories;
pub mod fixtures;
pub mod logging;

pub use assertions::{EmitRecorder, assert_emit, assert_not_emit};
pub use factories::Factory;
pub use logging::init_test_logging;
