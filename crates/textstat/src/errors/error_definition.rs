//! エラー定義

use thiserror::Error;

use crate::models::TextRule;

/// 入力検証エラー
///
/// 最初に違反したルールを保持する。`Display` がそのままクライアント向けメッセージになる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
  /// 違反したフィールド名（ボディ自体の場合は `value`）
  pub field: String,
  /// 違反したルール
  pub rule: TextRule,
  message: String,
}

impl ValidationError {
  /// ルール違反からエラーを作成
  #[must_use]
  pub fn new(field: impl Into<String>, rule: TextRule) -> Self {
    let field = field.into();
    let message = match rule {
      TextRule::IsObject => format!("\"{field}\" must be of type object"),
      TextRule::Required => format!("\"{field}\" is a required field"),
      TextRule::IsString => format!("\"{field}\" should be a type of 'text'"),
      TextRule::NonEmpty => format!("\"{field}\" cannot be an empty field"),
      TextRule::MinLength(limit) => {
        format!("\"{field}\" should have a minimum length of {limit}")
      }
      TextRule::MaxLength(limit) => {
        format!("\"{field}\" length must be less than or equal to {limit} characters long")
      }
      TextRule::NoUnknownKeys => format!("\"{field}\" is not allowed"),
    };
    Self { field, rule, message }
  }

  /// クライアント向けメッセージ
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }
}

/// 永続化層のエラー
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
  /// sqlx によるクエリ・接続エラー
  #[error("データベースエラー: {0}")]
  Database(#[from] sqlx::Error),

  /// マイグレーション適用の失敗
  #[error("マイグレーションに失敗しました: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  /// 上記以外の失敗（テスト用スタブ等）
  #[error("ストアエラー: {0}")]
  Other(String),
}

impl StoreError {
  /// 任意メッセージのエラーを作成
  #[must_use]
  pub fn other(message: impl Into<String>) -> Self {
    Self::Other(message.into())
  }
}

/// textstat クレート全体のエラー
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextstatError {
  /// 入力検証エラー
  #[error("入力検証エラー: {0}")]
  Validation(#[from] ValidationError),

  /// 永続化エラー
  #[error("ストアエラー: {0}")]
  Store(#[from] StoreError),
}

/// Result 型エイリアス
pub type TextstatResult<T> = std::result::Result<T, TextstatError>;
