//! Core signal types

use super::error::SignalError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type-safe signal name wrapper
///
/// # Examples
///
/// ```
/// use datacat_core::signals::SignalName;
///
/// let on_delete = SignalName::ON_DELETE;
/// assert_eq!(on_delete.as_str(), "on_delete");
///
/// let custom = SignalName::custom("on_harvest");
/// assert_eq!(custom.as_str(), "on_harvest");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalName(&'static str);

impl SignalName {
	/// Sent after a document has been inserted for the first time
	pub const ON_CREATE: Self = Self("on_create");
	/// Sent after an existing document has been saved again
	pub const ON_UPDATE: Self = Self("on_update");
	/// Sent after a document has been soft-deleted (its `deleted` field set)
	pub const ON_DELETE: Self = Self("on_delete");
	/// Sent after every save, created or not
	pub const AFTER_SAVE: Self = Self("after_save");
	/// Sent after a badge has been attached to a document
	pub const ON_BADGE_ADDED: Self = Self("on_badge_added");
	/// Sent after a badge has been removed from a document
	pub const ON_BADGE_REMOVED: Self = Self("on_badge_removed");

	pub const fn custom(name: &'static str) -> Self {
		Self(name)
	}

	pub fn as_str(&self) -> &'static str {
		self.0
	}
}

impl fmt::Display for SignalName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}

impl AsRef<str> for SignalName {
	fn as_ref(&self) -> &str {
		self.0
	}
}

/// Signal receiver function type
pub type ReceiverFn<T> = Arc<
	dyn Fn(Arc<T>) -> Pin<Box<dyn Future<Output = Result<(), SignalError>> + Send>> + Send + Sync,
>;
