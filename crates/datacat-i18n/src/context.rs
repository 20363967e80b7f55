//! Translation contexts and the process-wide active translation

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::catalog::MessageCatalog;
use crate::error::{I18nError, Result};

static ACTIVE: Lazy<RwLock<Option<Arc<TranslationContext>>>> = Lazy::new(|| RwLock::new(None));

/// Catalogs per locale, with a current and a fallback locale
///
/// Lookups try the current locale's catalog, then the fallback's, then
/// return the message unchanged.
#[derive(Debug, Clone)]
pub struct TranslationContext {
	locale: String,
	fallback: String,
	catalogs: HashMap<String, MessageCatalog>,
}

impl TranslationContext {
	pub fn new(locale: impl Into<String>, fallback: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			fallback: fallback.into(),
			catalogs: HashMap::new(),
		}
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn fallback(&self) -> &str {
		&self.fallback
	}

	/// Register `catalog` for `locale`
	///
	/// Replaces any catalog already registered for that locale.
	pub fn add_catalog(&mut self, locale: &str, catalog: MessageCatalog) -> Result<()> {
		if locale.trim().is_empty() {
			return Err(I18nError::InvalidLocale(locale.to_string()));
		}
		if catalog.locale() != locale {
			return Err(I18nError::LocaleMismatch {
				expected: locale.to_string(),
				actual: catalog.locale().to_string(),
			});
		}
		tracing::trace!(locale, messages = catalog.len(), "registered message catalog");
		self.catalogs.insert(locale.to_string(), catalog);
		Ok(())
	}

	pub fn catalog(&self, locale: &str) -> Option<&MessageCatalog> {
		self.catalogs.get(locale)
	}

	fn lookup<'a>(&'a self, find: impl Fn(&'a MessageCatalog) -> Option<&'a String>) -> Option<&'a String> {
		[self.locale.as_str(), self.fallback.as_str()]
			.into_iter()
			.filter_map(|locale| self.catalogs.get(locale))
			.find_map(find)
	}

	pub fn translate(&self, message: &str) -> String {
		self.lookup(|catalog| catalog.get(message))
			.cloned()
			.unwrap_or_else(|| message.to_string())
	}

	pub fn translate_context(&self, context: &str, message: &str) -> String {
		self.lookup(|catalog| catalog.get_context(context, message))
			.cloned()
			.unwrap_or_else(|| message.to_string())
	}
}

/// Restores the previously active translation when dropped
#[must_use = "the translation is deactivated as soon as the guard drops"]
pub struct TranslationGuard {
	previous: Option<Arc<TranslationContext>>,
}

impl Drop for TranslationGuard {
	fn drop(&mut self) {
		*ACTIVE.write() = self.previous.take();
	}
}

/// Make `ctx` the active translation until the guard drops
pub fn set_active_translation(ctx: Arc<TranslationContext>) -> TranslationGuard {
	let previous = ACTIVE.write().replace(ctx);
	TranslationGuard { previous }
}

/// Currently active translation context
pub fn active_translation() -> Option<Arc<TranslationContext>> {
	ACTIVE.read().clone()
}
