//! Translation context and active-translation tests

use datacat_i18n::{
	I18nError, MessageCatalog, TranslationContext, get_locale, gettext, pgettext,
	set_active_translation,
};
use rstest::rstest;
use serial_test::serial;
use std::sync::Arc;

fn french_context() -> TranslationContext {
	let mut ctx = TranslationContext::new("fr", "en");

	let mut fr = MessageCatalog::new("fr");
	fr.add("Health", "Santé");
	fr.add_context("reuse type", "Post", "Publication");
	ctx.add_catalog("fr", fr).unwrap();

	let mut en = MessageCatalog::new("en");
	en.add("Visualization", "Visualisation (en)");
	ctx.add_catalog("en", en).unwrap();

	ctx
}

#[test]
#[serial(i18n)]
fn test_gettext_without_active_context_is_identity() {
	assert_eq!(gettext("Health"), "Health");
	assert!(get_locale().is_none());
}

#[test]
#[serial(i18n)]
fn test_gettext_uses_active_context() {
	let _guard = set_active_translation(Arc::new(french_context()));

	assert_eq!(gettext("Health"), "Santé");
	assert_eq!(pgettext("reuse type", "Post"), "Publication");
	assert_eq!(get_locale().as_deref(), Some("fr"));
}

#[test]
#[serial(i18n)]
fn test_lookup_falls_back_then_returns_message() {
	let _guard = set_active_translation(Arc::new(french_context()));

	assert_eq!(gettext("Visualization"), "Visualisation (en)");
	assert_eq!(gettext("Unknown"), "Unknown");
}

#[test]
#[serial(i18n)]
fn test_guard_restores_previous_context() {
	// Arrange
	let outer = set_active_translation(Arc::new(TranslationContext::new("en", "en")));

	// Act
	{
		let _inner = set_active_translation(Arc::new(french_context()));
		assert_eq!(gettext("Health"), "Santé");
	}

	// Assert
	assert_eq!(gettext("Health"), "Health");
	assert_eq!(get_locale().as_deref(), Some("en"));
	drop(outer);
	assert!(get_locale().is_none());
}

#[rstest]
#[case("", "")]
#[case("  ", "  ")]
fn test_add_catalog_rejects_blank_locale(#[case] locale: &str, #[case] declared: &str) {
	let mut ctx = TranslationContext::new("fr", "en");

	let result = ctx.add_catalog(locale, MessageCatalog::new(declared));

	assert_eq!(result, Err(I18nError::InvalidLocale(locale.to_string())));
}

#[rstest]
fn test_add_catalog_rejects_mismatched_locale() {
	let mut ctx = TranslationContext::new("fr", "en");

	let result = ctx.add_catalog("fr", MessageCatalog::new("de"));

	assert!(matches!(result, Err(I18nError::LocaleMismatch { .. })));
}
