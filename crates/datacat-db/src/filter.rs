//! Query predicates over stored documents

use super::backend::RawDocument;
use serde_json::Value;

/// A predicate matched against a stored document
///
/// Field names may be dotted paths into nested objects (`"subject.id"`).
/// A missing field behaves like `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
	/// Matches every document
	All,
	/// Field equals the value
	Eq(String, Value),
	/// Field differs from the value
	Ne(String, Value),
	/// Field equals one of the values
	In(String, Vec<Value>),
	/// Field is an array containing the value
	Contains(String, Value),
	/// Field is an array with at least one element
	NotEmpty(String),
	/// Field is missing or null
	IsNull(String),
	And(Vec<Filter>),
	Or(Vec<Filter>),
	Not(Box<Filter>),
}

impl Filter {
	pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Eq(field.into(), value.into())
	}

	pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Ne(field.into(), value.into())
	}

	pub fn is_in<I, V>(field: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		Self::In(field.into(), values.into_iter().map(Into::into).collect())
	}

	pub fn contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Contains(field.into(), value.into())
	}

	pub fn not_empty(field: impl Into<String>) -> Self {
		Self::NotEmpty(field.into())
	}

	pub fn is_null(field: impl Into<String>) -> Self {
		Self::IsNull(field.into())
	}

	pub fn not_null(field: impl Into<String>) -> Self {
		Self::Not(Box::new(Self::IsNull(field.into())))
	}

	/// Combine with another filter, flattening nested conjunctions
	pub fn and(self, other: Filter) -> Self {
		match (self, other) {
			(Self::All, f) | (f, Self::All) => f,
			(Self::And(mut left), Self::And(right)) => {
				left.extend(right);
				Self::And(left)
			}
			(Self::And(mut left), f) => {
				left.push(f);
				Self::And(left)
			}
			(f, other) => Self::And(vec![f, other]),
		}
	}

	/// Evaluate the filter against a stored document
	pub fn matches(&self, doc: &RawDocument) -> bool {
		match self {
			Self::All => true,
			Self::Eq(field, value) => lookup(doc, field) == value,
			Self::Ne(field, value) => lookup(doc, field) != value,
			Self::In(field, values) => {
				let actual = lookup(doc, field);
				values.iter().any(|v| v == actual)
			}
			Self::Contains(field, value) => match lookup(doc, field) {
				Value::Array(items) => items.contains(value),
				_ => false,
			},
			Self::NotEmpty(field) => matches!(lookup(doc, field), Value::Array(items) if !items.is_empty()),
			Self::IsNull(field) => lookup(doc, field).is_null(),
			Self::And(filters) => filters.iter().all(|f| f.matches(doc)),
			Self::Or(filters) => filters.iter().any(|f| f.matches(doc)),
			Self::Not(filter) => !filter.matches(doc),
		}
	}
}

static NULL: Value = Value::Null;

fn lookup<'a>(doc: &'a RawDocument, path: &str) -> &'a Value {
	let mut parts = path.split('.');
	let Some(first) = parts.next() else {
		return &NULL;
	};
	let mut current = match doc.get(first) {
		Some(value) => value,
		None => return &NULL,
	};
	for part in parts {
		current = match current.get(part) {
			Some(value) => value,
			None => return &NULL,
		};
	}
	current
}
