//! Application context shared by every model operation

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use datacat_conf::Settings;
use datacat_core::SignalRegistry;
use datacat_db::Database;
use datacat_i18n::{MessageCatalog, TranslationContext, TranslationGuard, set_active_translation};
use datacat_taggit::TagConfig;
#[cfg(feature = "tasks")]
use datacat_tasks::ImmediateBackend;
use parking_lot::RwLock;

use crate::badges::{BadgeRegistry, Badged};
use crate::error::ModelResult;

/// Store, settings, signals and badge registries
///
/// Cloning is cheap and clones share state. Each catalog has its own
/// signal receivers and badge kinds, so two catalogs never observe each
/// other's events.
#[derive(Clone)]
pub struct Catalog {
	inner: Arc<CatalogInner>,
}

struct CatalogInner {
	db: Database,
	settings: Settings,
	signals: SignalRegistry,
	badges: RwLock<HashMap<&'static str, BadgeRegistry>>,
}

impl Catalog {
	pub fn new(db: Database, settings: Settings) -> Self {
		Self {
			inner: Arc::new(CatalogInner {
				db,
				settings,
				signals: SignalRegistry::new(),
				badges: RwLock::new(HashMap::new()),
			}),
		}
	}

	/// Catalog over a fresh in-memory store with default settings
	pub fn in_memory() -> Self {
		Self::new(Database::in_memory(), Settings::default())
	}

	pub fn db(&self) -> &Database {
		&self.inner.db
	}

	pub fn settings(&self) -> &Settings {
		&self.inner.settings
	}

	pub fn tag_config(&self) -> &TagConfig {
		&self.inner.settings.tags
	}

	pub fn signals(&self) -> &SignalRegistry {
		&self.inner.signals
	}

	/// Empty translation context for the `[i18n]` locales
	pub fn translation_context(&self) -> TranslationContext {
		let i18n = &self.inner.settings.i18n;
		TranslationContext::new(&i18n.default_locale, &i18n.fallback_locale)
	}

	/// Activate `catalogs` under the configured locales until the guard drops
	///
	/// Each message catalog is registered for its own locale, so catalogs
	/// for locales other than the default and fallback are kept but unused.
	pub fn activate_translation(
		&self,
		catalogs: impl IntoIterator<Item = MessageCatalog>,
	) -> ModelResult<TranslationGuard> {
		let mut ctx = self.translation_context();
		for messages in catalogs {
			let locale = messages.locale().to_string();
			ctx.add_catalog(&locale, messages)?;
		}
		tracing::debug!(locale = ctx.locale(), fallback = ctx.fallback(), "activated translation");
		Ok(set_active_translation(Arc::new(ctx)))
	}

	/// Task backend running on the `[tasks]` default queue
	#[cfg(feature = "tasks")]
	pub fn task_backend(&self) -> ImmediateBackend {
		ImmediateBackend::new(self.inner.settings.tasks.default_queue.as_str())
	}

	/// Badge kinds allowed on `M`
	///
	/// The registry is seeded with `M::default_badge_kinds()` on first use;
	/// kinds registered afterwards are visible through every clone.
	pub fn badges<M: Badged>(&self) -> BadgeRegistry {
		if let Some(registry) = self.inner.badges.read().get(M::COLLECTION_NAME) {
			return registry.clone();
		}
		self.inner
			.badges
			.write()
			.entry(M::COLLECTION_NAME)
			.or_insert_with(|| BadgeRegistry::new(M::default_badge_kinds().iter().copied()))
			.clone()
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self::in_memory()
	}
}

impl fmt::Debug for Catalog {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Catalog")
			.field("db", &self.inner.db)
			.field("settings", &self.inner.settings)
			.field("signals", &self.inner.signals)
			.finish()
	}
}
