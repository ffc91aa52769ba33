//! Persisted text entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Primary key type of stored records.
pub type DbId = i64;

/// Timestamp type of stored records.
pub type Timestamp = DateTime<Utc>;

/// A row from the `Texts` table.
///
/// Serialized in the camelCase shape clients receive from `POST /api/text`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct TextRecord {
  /// Generated on create
  pub id: DbId,
  /// Submitted text (3 to 255 characters)
  pub text: String,
  /// Insert time
  pub created_at: Timestamp,
  /// Last modification time; equal to `created_at` since records are never updated
  pub updated_at: Timestamp,
}
