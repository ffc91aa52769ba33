//! SQLite implementation of [`TextStore`]

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::text_store::TextStore;
use crate::errors::StoreError;
use crate::models::{DbId, NewText, TextRecord};

/// Column list for `Texts` queries.
const TEXT_COLUMNS: &str = r#""id", "text", "createdAt", "updatedAt""#;

/// Text store backed by a sqlx SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteTextStore {
  pool: SqlitePool,
}

impl SqliteTextStore {
  /// Opens (creating if missing) the database at `url` and applies migrations.
  ///
  /// # Arguments
  /// * `url` - e.g. `sqlite://textstat.db`
  ///
  /// # Errors
  /// Returns an error if the URL is invalid, the database cannot be opened,
  /// or a migration fails
  pub async fn connect(url: &str) -> Result<Self, StoreError> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    tracing::info!(url, "データベースに接続しました");
    Self::from_pool(pool).await
  }

  /// Private in-memory database.
  ///
  /// Every SQLite in-memory connection is its own database, so the pool is
  /// pinned to one connection that never expires.
  ///
  /// # Errors
  /// Returns an error if the connection or the migrations fail
  pub async fn in_memory() -> Result<Self, StoreError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
      .min_connections(1)
      .max_connections(1)
      .idle_timeout(None)
      .max_lifetime(None)
      .connect_with(options)
      .await?;
    Self::from_pool(pool).await
  }

  /// Wraps an existing pool and applies migrations.
  ///
  /// # Errors
  /// Returns an error if a migration fails
  pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(Self { pool })
  }

  /// Underlying pool
  #[must_use]
  pub fn pool(&self) -> &SqlitePool {
    &self.pool
  }
}

#[async_trait]
impl TextStore for SqliteTextStore {
  async fn create(&self, new_text: &NewText) -> Result<TextRecord, StoreError> {
    let now = Utc::now();
    let query = format!(
      r#"INSERT INTO "Texts" ("text", "createdAt", "updatedAt") VALUES (?, ?, ?) RETURNING {TEXT_COLUMNS}"#
    );
    let record = sqlx::query_as::<_, TextRecord>(&query)
      .bind(new_text.as_str())
      .bind(now)
      .bind(now)
      .fetch_one(&self.pool)
      .await?;
    Ok(record)
  }

  async fn find_by_id(&self, id: DbId) -> Result<Option<TextRecord>, StoreError> {
    let query = format!(r#"SELECT {TEXT_COLUMNS} FROM "Texts" WHERE "id" = ?"#);
    let record =
      sqlx::query_as::<_, TextRecord>(&query).bind(id).fetch_optional(&self.pool).await?;
    Ok(record)
  }

  async fn ping(&self) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(&self.pool).await?;
    Ok(())
  }
}
