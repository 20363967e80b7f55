//! Integration tests for the typed database facade

use datacat_db::{Database, DbError, Document, Filter, ObjectId};
use rstest::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Article {
	id: Option<ObjectId>,
	title: String,
	tags: Vec<String>,
	private: bool,
}

impl Article {
	fn new(title: &str, tags: &[&str], private: bool) -> Self {
		Self {
			id: None,
			title: title.to_string(),
			tags: tags.iter().map(|t| t.to_string()).collect(),
			private,
		}
	}
}

impl Document for Article {
	const COLLECTION_NAME: &'static str = "article";

	fn id(&self) -> Option<ObjectId> {
		self.id
	}

	fn set_id(&mut self, id: ObjectId) {
		self.id = Some(id);
	}
}

#[fixture]
fn db() -> Database {
	Database::in_memory()
}

#[rstest]
#[tokio::test]
async fn test_insert_assigns_id_and_get_returns_document(db: Database) {
	// Arrange
	let mut article = Article::new("rust", &["lang"], false);

	// Act
	let id = db.insert(&mut article).await.unwrap();
	let found: Option<Article> = db.get(id).await.unwrap();

	// Assert
	assert_eq!(article.id, Some(id));
	assert_eq!(found, Some(article));
}

#[rstest]
#[tokio::test]
async fn test_insert_keeps_existing_id(db: Database) {
	// Arrange
	let preset = ObjectId::new();
	let mut article = Article::new("preset", &[], false);
	article.id = Some(preset);

	// Act
	let id = db.insert(&mut article).await.unwrap();

	// Assert
	assert_eq!(id, preset);
}

#[rstest]
#[tokio::test]
async fn test_replace_requires_id(db: Database) {
	let article = Article::new("unsaved", &[], false);

	let result = db.replace(&article).await;

	assert!(matches!(result, Err(DbError::MissingId { .. })));
}

#[rstest]
#[tokio::test]
async fn test_replace_unknown_document_is_not_found(db: Database) {
	let mut article = Article::new("ghost", &[], false);
	article.id = Some(ObjectId::new());

	let result = db.replace(&article).await;

	assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[rstest]
#[tokio::test]
async fn test_replace_overwrites_stored_version(db: Database) {
	// Arrange
	let mut article = Article::new("draft", &[], false);
	db.insert(&mut article).await.unwrap();

	// Act
	article.title = "final".to_string();
	db.replace(&article).await.unwrap();
	let reloaded = db.reload(&article).await.unwrap();

	// Assert
	assert_eq!(reloaded.title, "final");
}

#[rstest]
#[tokio::test]
async fn test_queryset_filters_and_counts(db: Database) {
	// Arrange
	for (title, tags, private) in [
		("a", &["x"][..], false),
		("b", &[][..], false),
		("c", &["y"][..], true),
	] {
		db.insert(&mut Article::new(title, tags, private)).await.unwrap();
	}

	// Act
	let visible = db
		.objects::<Article>()
		.filter(Filter::eq("private", false))
		.filter(Filter::not_empty("tags"));

	// Assert
	assert_eq!(visible.count().await.unwrap(), 1);
	assert_eq!(visible.first().await.unwrap().unwrap().title, "a");
	assert!(visible.exists().await.unwrap());
}

#[rstest]
#[tokio::test]
async fn test_queryset_exclude_and_limit(db: Database) {
	for title in ["a", "b", "c", "d"] {
		db.insert(&mut Article::new(title, &[], false)).await.unwrap();
	}

	let rest = db
		.objects::<Article>()
		.exclude(Filter::eq("title", "a"))
		.limit(2)
		.all()
		.await
		.unwrap();

	let titles: Vec<_> = rest.iter().map(|a| a.title.as_str()).collect();
	assert_eq!(titles, vec!["b", "c"]);
}

#[rstest]
#[tokio::test]
async fn test_delete_reports_removal(db: Database) {
	let mut article = Article::new("gone", &[], false);
	let id = db.insert(&mut article).await.unwrap();

	assert!(db.delete::<Article>(id).await.unwrap());
	assert!(!db.delete::<Article>(id).await.unwrap());
	assert!(db.get::<Article>(id).await.unwrap().is_none());
}

#[rstest]
#[tokio::test]
async fn test_update_fields_leaves_other_fields(db: Database) {
	// Arrange
	let mut article = Article::new("stable", &["t"], false);
	let id = db.insert(&mut article).await.unwrap();
	let mut fields = serde_json::Map::new();
	fields.insert("private".to_string(), serde_json::Value::Bool(true));

	// Act
	db.update_fields::<Article>(id, fields).await.unwrap();
	let stored = db.get_or_not_found::<Article>(id).await.unwrap();

	// Assert
	assert!(stored.private);
	assert_eq!(stored.title, "stable");
	assert_eq!(stored.tags, vec!["t".to_string()]);
}
