//! APIエラー定義

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// textstat クレートのエラー型をインポート
use textstat::errors::{StoreError, TextstatError, ValidationError};
use textstat::models::DbId;

/// 500 系エラーでクライアントに返す固定メッセージ
///
/// 内部の詳細はログにのみ出力する。
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値の検証エラー
  Validation,
  /// パスの ID が整数でない
  InvalidId,
  /// 対象のテキストが存在しない
  NotFound,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Validation => "validation_error",
      Self::InvalidId => "invalid_id",
      Self::NotFound => "not_found",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation | Self::InvalidId => StatusCode::BAD_REQUEST,
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値の検証エラー（メッセージはそのままクライアントに返す）
  #[error("{0}")]
  Validation(String),

  /// パスの ID が整数でない
  #[error("Invalid text ID format")]
  InvalidId(String),

  /// 対象のテキストが存在しない
  #[error("Text not found")]
  NotFound(DbId),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Validation(_) => ApiErrorKind::Validation,
      Self::InvalidId(_) => ApiErrorKind::InvalidId,
      Self::NotFound(_) => ApiErrorKind::NotFound,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// クライアントに返すメッセージ
  ///
  /// 500 系は固定メッセージに置き換える。
  #[must_use]
  pub fn client_message(&self) -> String {
    match self.kind() {
      ApiErrorKind::Internal | ApiErrorKind::Config => INTERNAL_ERROR_MESSAGE.to_string(),
      _ => self.to_string(),
    }
  }

  /// 検証エラーを作成
  #[must_use]
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  /// ID 形式エラーを作成
  #[must_use]
  pub fn invalid_id(raw: impl Into<String>) -> Self {
    Self::InvalidId(raw.into())
  }

  /// 未検出エラーを作成
  #[must_use]
  pub fn not_found(id: DbId) -> Self {
    Self::NotFound(id)
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(code = self.code(), error = %self, "リクエスト処理に失敗しました");
    } else {
      tracing::debug!(code = self.code(), error = %self, "クライアントエラー");
    }

    let body = ErrorResponse { error: self.client_message() };
    (status, Json(body)).into_response()
  }
}

impl From<ValidationError> for ApiError {
  fn from(err: ValidationError) -> Self {
    ApiError::validation(err.message())
  }
}

impl From<StoreError> for ApiError {
  fn from(err: StoreError) -> Self {
    ApiError::internal(err.to_string())
  }
}

/// TextstatError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<TextstatError> for ApiError {
  fn from(err: TextstatError) -> Self {
    match err {
      TextstatError::Validation(err) => err.into(),
      TextstatError::Store(err) => err.into(),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Json extractor の拒否を検証エラーにマッピングする
///
/// ボディは `Value` で受けるため、ここに来るのは構文エラーと Content-Type 不備のみ。
/// ボディの形（オブジェクトか、未知のキーが無いか）は `NewText::parse` が検証する。
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::validation(rejection.body_text())
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
