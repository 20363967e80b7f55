//! # datacat-conf
//!
//! Settings for the datacat model layer.
//!
//! [`Settings`] deserializes from TOML. Every field has a default, so an
//! empty document is valid. Values can then be overridden from `DATACAT_*`
//! environment variables through [`Env`].
//!
//! ```
//! use datacat_conf::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//! [tags]
//! max_length = 32
//! "#).unwrap();
//!
//! assert_eq!(settings.tags.min_length, 3);
//! assert_eq!(settings.tags.max_length, 32);
//! assert_eq!(settings.i18n.default_locale, "en");
//! ```

pub mod env;
pub mod error;
pub mod settings;

pub use env::{Env, EnvError, parse_bool};
pub use error::SettingsError;
pub use settings::{DEFAULT_ENV_PREFIX, I18nSettings, Settings, TaskSettings};
