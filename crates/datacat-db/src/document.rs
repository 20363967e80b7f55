//! Core `Document` trait definition.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stored document
///
/// Serialized as its hyphenated string form.
///
/// ```
/// use datacat_db::ObjectId;
///
/// let id = ObjectId::new();
/// let parsed: ObjectId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(uuid::Uuid);

impl ObjectId {
	/// Generate a new random identifier
	pub fn new() -> Self {
		Self(uuid::Uuid::new_v4())
	}
}

impl Default for ObjectId {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for ObjectId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ObjectId {
	type Err = uuid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(uuid::Uuid::parse_str(s)?))
	}
}

impl From<ObjectId> for serde_json::Value {
	fn from(id: ObjectId) -> Self {
		serde_json::Value::String(id.to_string())
	}
}

/// Core trait for persisted documents
///
/// `COLLECTION_NAME` selects the collection; the document's own `id` field is
/// stored alongside its other fields, so filters can match on `"id"`.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
	/// Collection name in the store
	const COLLECTION_NAME: &'static str;

	/// Get the document's ID.
	///
	/// Returns `None` if the document hasn't been persisted yet.
	fn id(&self) -> Option<ObjectId>;

	/// Set the document's ID.
	///
	/// Called on insertion.
	fn set_id(&mut self, id: ObjectId);
}
