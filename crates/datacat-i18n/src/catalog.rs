//! Message catalog for storing translations

use std::collections::HashMap;

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use datacat_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation("Hello", "Bonjour");
/// catalog.add_context("reuse topic", "Others", "Autres");
///
/// assert_eq!(catalog.get("Hello"), Some(&"Bonjour".to_string()));
/// assert_eq!(catalog.get_context("reuse topic", "Others"), Some(&"Autres".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
	contexts: HashMap<(String, String), String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
			contexts: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Add a simple translation (alias for add_translation)
	pub fn add(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.add_translation(message, translation);
	}

	/// Add a contextual translation
	pub fn add_context(
		&mut self,
		context: impl Into<String>,
		message: impl Into<String>,
		translation: impl Into<String>,
	) {
		self.contexts
			.insert((context.into(), message.into()), translation.into());
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}

	/// Get a contextual translation
	pub fn get_context(&self, context: &str, message: &str) -> Option<&String> {
		self.contexts
			.get(&(context.to_string(), message.to_string()))
	}

	pub fn len(&self) -> usize {
		self.messages.len() + self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty() && self.contexts.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_message_returns_none() {
		let catalog = MessageCatalog::new("de");

		assert!(catalog.get("Hello").is_none());
		assert!(catalog.is_empty());
	}

	#[rstest]
	fn test_context_is_separate_from_plain_messages() {
		// Arrange
		let mut catalog = MessageCatalog::new("fr");
		catalog.add("Post", "Billet");
		catalog.add_context("reuse type", "Post", "Publication");

		// Act
		let plain = catalog.get("Post");
		let contextual = catalog.get_context("reuse type", "Post");

		// Assert
		assert_eq!(plain.map(String::as_str), Some("Billet"));
		assert_eq!(contextual.map(String::as_str), Some("Publication"));
		assert_eq!(catalog.len(), 2);
	}
}
