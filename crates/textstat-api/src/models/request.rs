//! リクエストモデル定義

use serde::Deserialize;
use serde_json::Value;

/// テキスト登録リクエスト
///
/// ボディは任意の JSON として受け取り、オブジェクトであることも含めて
/// `textstat::models::NewText::parse` のルールで検証する。
/// 構造体へ直接デシリアライズすると配列 `["..."]` が位置指定で受理されてしまうため。
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CreateTextRequest {
  /// リクエストボディ（`{ "text": "..." }` を期待）
  pub body: Value,
}
