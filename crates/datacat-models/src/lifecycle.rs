//! Persistence and signal emission shared by the catalogue documents

use datacat_core::signals::model_signals;
use datacat_db::{Database, Document};
use serde::{Deserialize, Deserializer};

use crate::catalog::Catalog;
use crate::error::ModelResult;

/// What a save changed, as far as signals are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transition {
	pub created: bool,
	pub deleted: bool,
}

/// Stored version of `doc`, if any
pub(crate) async fn stored<M: Document>(db: &Database, doc: &M) -> ModelResult<Option<M>> {
	match doc.id() {
		Some(id) => Ok(db.get::<M>(id).await?),
		None => Ok(None),
	}
}

pub(crate) async fn write<M: Document>(db: &Database, doc: &mut M, exists: bool) -> ModelResult<()> {
	if exists {
		db.replace(doc).await?;
	} else {
		db.insert(doc).await?;
	}
	Ok(())
}

/// Insert `doc` or replace its stored version, returning the previous one
pub(crate) async fn upsert<M: Document>(db: &Database, doc: &mut M) -> ModelResult<Option<M>> {
	let previous = stored(db, doc).await?;
	write(db, doc, previous.is_some()).await?;
	Ok(previous)
}

/// Fire `on_create` or `on_update`, then `on_delete` when the save
/// soft-deleted the document, then `after_save`
pub(crate) async fn emit<M: Document>(catalog: &Catalog, doc: &M, transition: Transition) -> ModelResult<()> {
	let signals = catalog.signals();
	if transition.created {
		model_signals::on_create::<M>(signals).send(doc.clone()).await?;
	} else {
		model_signals::on_update::<M>(signals).send(doc.clone()).await?;
	}
	if transition.deleted {
		model_signals::on_delete::<M>(signals).send(doc.clone()).await?;
	}
	model_signals::after_save::<M>(signals).send(doc.clone()).await?;
	Ok(())
}

/// Reads a missing or null boolean as `false`
pub(crate) fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
