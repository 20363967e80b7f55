//! Document store, filters and querysets.
//!
//! # Examples
//!
//! ```rust
//! use datacat::db::{Database, Filter};
//!
//! let db = Database::in_memory();
//! let filter = Filter::eq("private", false);
//! # let _ = (db, filter);
//! ```

#[cfg(feature = "db")]
pub use datacat_db::*;
