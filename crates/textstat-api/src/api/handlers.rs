//! HTTPハンドラー定義

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
};
use textstat::Metric;
use textstat::models::TextRecord;
use tracing::{debug, info};

use crate::errors::Result;
use crate::models::{CreateTextRequest, MetricResponse};

use super::state::AppState;

/// POST /api/text エンドポイント
///
/// テキストを検証して保存する。
///
/// # Request Body
/// ```json
/// { "text": "保存するテキスト（3〜255文字）" }
/// ```
///
/// # Response
/// - 201 Created: 保存したレコード `{id, text, createdAt, updatedAt}`
/// - 400 Bad Request: 入力エラー（最初に違反したルールのメッセージ）
/// - 500 Internal Server Error: 保存失敗
pub async fn post_text(
  State(state): State<AppState>,
  payload: std::result::Result<Json<CreateTextRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TextRecord>)> {
  let Json(request) = payload?;
  debug!("テキスト登録リクエストを受信");

  let record = state.service.create(request).await?;

  info!(id = record.id, "テキストを登録しました");
  Ok((StatusCode::CREATED, Json(record)))
}

/// 保存済みテキストに対して指標を計算する共通処理
async fn analyze(state: &AppState, raw_id: &str, metric: Metric) -> Result<Json<MetricResponse>> {
  debug!(id = raw_id, %metric, "解析リクエストを受信");
  let response = state.service.analyze(raw_id, metric).await?;
  Ok(Json(response))
}

/// GET /api/text/{id}/words → `{ "wordCount": n }`
pub async fn get_word_count(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<MetricResponse>> {
  analyze(&state, &id, Metric::Words).await
}

/// GET /api/text/{id}/characters → `{ "characterCount": n }`
pub async fn get_character_count(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<MetricResponse>> {
  analyze(&state, &id, Metric::Characters).await
}

/// GET /api/text/{id}/sentences → `{ "sentenceCount": n }`
pub async fn get_sentence_count(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<MetricResponse>> {
  analyze(&state, &id, Metric::Sentences).await
}

/// GET /api/text/{id}/paragraphs → `{ "paragraphCount": n }`
pub async fn get_paragraph_count(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<MetricResponse>> {
  analyze(&state, &id, Metric::Paragraphs).await
}

/// GET /api/text/{id}/longest-words → `{ "longestWords": [...] }`
pub async fn get_longest_words(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Result<Json<MetricResponse>> {
  analyze(&state, &id, Metric::LongestWords).await
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働し、ストアに到達できるかを確認する。
pub async fn health_check(State(state): State<AppState>) -> Result<&'static str> {
  state.service.health().await?;
  Ok("OK")
}
