//! # datacat-i18n
//!
//! Translation lookup for model labels.
//!
//! A [`TranslationContext`] bundles one [`MessageCatalog`] per locale.
//! Activating a context with [`set_active_translation`] makes [`gettext`]
//! and [`pgettext`] resolve against it until the returned guard drops.
//! Without an active context messages come back untranslated.
//!
//! ```
//! use datacat_i18n::{MessageCatalog, TranslationContext, gettext, set_active_translation};
//! use std::sync::Arc;
//!
//! let mut fr = MessageCatalog::new("fr");
//! fr.add("Health", "Santé");
//! let mut ctx = TranslationContext::new("fr", "en");
//! ctx.add_catalog("fr", fr).unwrap();
//!
//! let _guard = set_active_translation(Arc::new(ctx));
//! assert_eq!(gettext("Health"), "Santé");
//! ```

mod catalog;
mod context;
mod error;

pub use catalog::MessageCatalog;
pub use context::{TranslationContext, TranslationGuard, active_translation, set_active_translation};
pub use error::{I18nError, Result};

/// Translate `message` with the active translation context
pub fn gettext(message: &str) -> String {
	match active_translation() {
		Some(ctx) => ctx.translate(message),
		None => message.to_string(),
	}
}

/// Translate `message` disambiguated by `context`
pub fn pgettext(context: &str, message: &str) -> String {
	match active_translation() {
		Some(ctx) => ctx.translate_context(context, message),
		None => message.to_string(),
	}
}

/// Locale of the active translation context, if any
pub fn get_locale() -> Option<String> {
	active_translation().map(|ctx| ctx.locale().to_string())
}
