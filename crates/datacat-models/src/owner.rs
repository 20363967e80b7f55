//! Ownership of catalogue documents

use datacat_db::{Filter, ObjectId};
use serde::{Deserialize, Serialize};

use crate::organization::Organization;
use crate::user::User;

/// Identity a document can be owned by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "class", content = "id", rename_all = "snake_case")]
pub enum Owner {
	User(ObjectId),
	Organization(ObjectId),
}

impl From<&User> for Owner {
	fn from(user: &User) -> Self {
		Self::User(user.id)
	}
}

impl From<&Organization> for Owner {
	fn from(org: &Organization) -> Self {
		Self::Organization(org.id)
	}
}

/// Filter matching documents whose `owner` or `organization` is among `owners`
///
/// An empty list matches nothing.
pub fn owned_by_filter<I>(owners: I) -> Filter
where
	I: IntoIterator<Item = Owner>,
{
	let (mut users, mut orgs) = (Vec::new(), Vec::new());
	for owner in owners {
		match owner {
			Owner::User(id) => users.push(id),
			Owner::Organization(id) => orgs.push(id),
		}
	}
	let mut clauses = Vec::new();
	if !users.is_empty() {
		clauses.push(Filter::is_in("owner", users));
	}
	if !orgs.is_empty() {
		clauses.push(Filter::is_in("organization", orgs));
	}
	Filter::Or(clauses)
}
