//! Settings loading from files and the environment

use datacat_conf::{Env, Settings, SettingsError};
use rstest::rstest;
use serial_test::serial;
use std::env;

#[rstest]
fn test_from_file_reads_all_sections() {
	// Arrange
	let path = env::temp_dir().join(format!("datacat-settings-{}.toml", std::process::id()));
	std::fs::write(
		&path,
		"[tags]\nmin_length = 2\n\n[i18n]\ndefault_locale = \"fr\"\n\n[tasks]\ndefault_queue = \"metrics\"\n",
	)
	.unwrap();

	// Act
	let settings = Settings::from_file(&path).unwrap();
	std::fs::remove_file(&path).unwrap();

	// Assert
	assert_eq!(settings.tags.min_length, 2);
	assert_eq!(settings.tags.max_length, 96);
	assert_eq!(settings.i18n.default_locale, "fr");
	assert_eq!(settings.i18n.fallback_locale, "en");
	assert_eq!(settings.tasks.default_queue, "metrics");
}

#[rstest]
fn test_from_file_missing() {
	let result = Settings::from_file("/nonexistent/datacat.toml");

	assert!(matches!(result, Err(SettingsError::Io { .. })));
}

#[rstest]
#[serial(env)]
fn test_apply_env_overrides() {
	// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
	// This test uses #[serial] to ensure exclusive access to environment variables.
	unsafe {
		env::set_var("DCSET_TAGS_MAX_LENGTH", "40");
		env::set_var("DCSET_DEFAULT_LOCALE", "de");
	}
	let mut settings = Settings::default();

	let result = settings.apply_env(&Env::new().with_prefix("DCSET_"));

	// SAFETY: serialized on the "env" key
	unsafe {
		env::remove_var("DCSET_TAGS_MAX_LENGTH");
		env::remove_var("DCSET_DEFAULT_LOCALE");
	}
	result.unwrap();
	assert_eq!(settings.tags.max_length, 40);
	assert_eq!(settings.i18n.default_locale, "de");
	assert_eq!(settings.tasks.default_queue, "default");
}

#[rstest]
#[serial(env)]
fn test_apply_env_rejects_negative_length() {
	// SAFETY: serialized on the "env" key
	unsafe {
		env::set_var("DCNEG_TAGS_MIN_LENGTH", "-1");
	}
	let mut settings = Settings::default();

	let result = settings.apply_env(&Env::new().with_prefix("DCNEG_"));

	// SAFETY: serialized on the "env" key
	unsafe {
		env::remove_var("DCNEG_TAGS_MIN_LENGTH");
	}
	assert!(matches!(result, Err(SettingsError::Invalid { .. })));
}
