//! Text Statistics Service
//!
//! Orchestrates one request: validate or parse input, hit the store once,
//! run the analysis. Holds no per-request state.

use std::sync::Arc;

use textstat::models::{DbId, TextRecord};
use textstat::store::{TextStore, submit_text};
use textstat::Metric;

use crate::errors::{ApiError, Result};
use crate::models::{CreateTextRequest, MetricResponse};

/// Parses the `{id}` path segment
///
/// # Errors
/// `InvalidId` if `raw` is not an integer token
pub fn parse_text_id(raw: &str) -> Result<DbId> {
  raw.parse::<DbId>().map_err(|_| ApiError::invalid_id(raw))
}

/// Text statistics service
///
/// - Production: `TextApiService::new(Arc::new(SqliteTextStore::connect(url).await?))`
/// - Test: `TextApiService::new(Arc::new(FailingStore))`
#[derive(Clone)]
pub struct TextApiService {
  store: Arc<dyn TextStore>,
}

impl TextApiService {
  /// Creates the service over a store
  #[must_use]
  pub fn new(store: Arc<dyn TextStore>) -> Self {
    Self { store }
  }

  /// Validates and stores a submitted text
  ///
  /// # Errors
  /// - Validation error with the first failing rule's message
  /// - Internal error if the insert fails
  pub async fn create(&self, request: CreateTextRequest) -> Result<TextRecord> {
    let record = submit_text(self.store.as_ref(), &request.body).await?;
    Ok(record)
  }

  /// Loads the text `raw_id` refers to and computes `metric` over it
  ///
  /// # Errors
  /// - `InvalidId` if `raw_id` is not an integer
  /// - `NotFound` if no record has that id
  /// - Internal error if the lookup fails
  pub async fn analyze(&self, raw_id: &str, metric: Metric) -> Result<MetricResponse> {
    let id = parse_text_id(raw_id)?;
    let record = self.store.find_by_id(id).await?.ok_or_else(|| ApiError::not_found(id))?;
    Ok(MetricResponse::compute(metric, &record.text))
  }

  /// Checks the store is reachable
  ///
  /// # Errors
  /// Internal error if the store does not answer
  pub async fn health(&self) -> Result<()> {
    self.store.ping().await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use textstat::SqliteTextStore;
  use textstat::MetricValue;

  use super::*;
  use crate::errors::ApiErrorKind;

  async fn create_test_service() -> TextApiService {
    let store = SqliteTextStore::in_memory().await.expect("in-memory store");
    TextApiService::new(Arc::new(store))
  }

  fn request(body: serde_json::Value) -> CreateTextRequest {
    CreateTextRequest { body }
  }

  #[test]
  fn parse_text_id_accepts_integers() {
    assert_eq!(parse_text_id("1").unwrap(), 1);
    assert_eq!(parse_text_id("-4").unwrap(), -4);
  }

  #[test]
  fn parse_text_id_rejects_non_integers() {
    for raw in ["invalid", "1.5", "", "12abc", "99999999999999999999"] {
      let err = parse_text_id(raw).unwrap_err();
      assert_eq!(err.kind(), ApiErrorKind::InvalidId, "raw = {raw:?}");
    }
  }

  #[tokio::test]
  async fn create_then_analyze() {
    let service = create_test_service().await;
    let record = service.create(request(json!({ "text": "One. Two!\nThree?" }))).await.unwrap();

    let response = service.analyze(&record.id.to_string(), Metric::Sentences).await.unwrap();
    assert_eq!(response.value, MetricValue::Count(3));

    let response = service.analyze(&record.id.to_string(), Metric::Paragraphs).await.unwrap();
    assert_eq!(response.value, MetricValue::Count(2));
  }

  #[tokio::test]
  async fn create_missing_text_is_validation_error() {
    let service = create_test_service().await;
    let err = service.create(request(json!({}))).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.client_message(), "\"text\" is a required field");
  }

  #[tokio::test]
  async fn create_rejects_array_body() {
    let service = create_test_service().await;
    let err = service.create(request(json!(["abc def"]))).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.client_message(), "\"value\" must be of type object");
  }

  #[tokio::test]
  async fn analyze_missing_record_is_not_found() {
    let service = create_test_service().await;
    let err = service.analyze("999", Metric::Words).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::NotFound);
  }

  #[tokio::test]
  async fn analyze_checks_id_before_store() {
    let service = create_test_service().await;
    let err = service.analyze("invalid", Metric::Words).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::InvalidId);
  }

  #[tokio::test]
  async fn health_reports_store_state() {
    let service = create_test_service().await;
    assert!(service.health().await.is_ok());
  }
}
