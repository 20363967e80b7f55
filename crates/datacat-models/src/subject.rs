//! Generic references to catalogue documents

use datacat_db::{Document, Filter, ObjectId};
use serde::{Deserialize, Serialize};

/// Reference to a document of any collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectRef {
	pub class: String,
	pub id: ObjectId,
}

impl SubjectRef {
	pub fn new<M: Document>(id: ObjectId) -> Self {
		Self {
			class: M::COLLECTION_NAME.to_string(),
			id,
		}
	}

	pub fn is<M: Document>(&self) -> bool {
		self.class == M::COLLECTION_NAME
	}

	/// Filter on a `SubjectRef` stored under `field`
	pub(crate) fn filter(field: &str, subject: &SubjectRef) -> Filter {
		Filter::eq(format!("{field}.class"), subject.class.clone())
			.and(Filter::eq(format!("{field}.id"), subject.id))
	}
}
