//! Persistence seam for text records

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::{StoreError, TextstatResult};
use crate::models::{DbId, NewText, TextRecord};

/// Common interface for text record persistence
///
/// Lets the SQLite implementation (`SqliteTextStore`) be swapped with test
/// stubs that fail on demand.
#[async_trait]
pub trait TextStore: Send + Sync {
  /// Inserts a record and returns it with its generated id and timestamps
  ///
  /// # Errors
  /// Persistence failure
  async fn create(&self, new_text: &NewText) -> Result<TextRecord, StoreError>;

  /// Point lookup by primary key; `Ok(None)` when no such record exists
  ///
  /// # Errors
  /// Persistence failure
  async fn find_by_id(&self, id: DbId) -> Result<Option<TextRecord>, StoreError>;

  /// Checks the backend is reachable
  ///
  /// # Errors
  /// Persistence failure
  async fn ping(&self) -> Result<(), StoreError>;
}

/// Validates a create payload (`{ "text": "..." }`) and stores it.
///
/// # Errors
/// - `TextstatError::Validation` when a rule fails (nothing is stored)
/// - `TextstatError::Store` when the insert fails
pub async fn submit_text(store: &dyn TextStore, body: &Value) -> TextstatResult<TextRecord> {
  let new_text = NewText::parse(body)?;
  let record = store.create(&new_text).await?;
  tracing::debug!(id = record.id, text_len = record.text.len(), "text record created");
  Ok(record)
}
