//! Integration tests for tag normalization

use datacat_taggit::{TagConfig, Taggable, normalize_tags};
use rstest::rstest;

#[derive(Default)]
struct Item {
	tags: Vec<String>,
}

impl Taggable for Item {
	fn tags(&self) -> &[String] {
		&self.tags
	}

	fn tags_mut(&mut self) -> &mut Vec<String> {
		&mut self.tags
	}
}

/// Duplicate spellings collapse and punctuation disappears
#[rstest]
fn test_set_tags_removes_duplicates_and_punctuation() {
	// Arrange
	let mut item = Item::default();

	// Act
	item.set_tags([" one another!", " one another!", "This IS a \"tag\"…"]);

	// Assert
	assert_eq!(item.tags().len(), 2);
	assert_eq!(item.tags()[0], "one-another");
	assert_eq!(item.tags()[1], "this-is-a-tag");
}

#[rstest]
fn test_short_and_long_tags_are_dropped() {
	let long = "x".repeat(97);

	let tags = normalize_tags(["ok", "fine", long.as_str()], &TagConfig::default());

	assert_eq!(tags, vec!["fine"]);
}

#[rstest]
fn test_clean_tags_applies_stricter_config() {
	// Arrange
	let mut item = Item::default();
	item.set_tags(["transport", "bus"]);
	let strict = TagConfig::builder().min_length(4).build().unwrap();

	// Act
	item.clean_tags(&strict);

	// Assert
	assert_eq!(item.tags(), ["transport"]);
	assert!(item.has_tag("transport"));
	assert!(!item.has_tag("bus"));
}
