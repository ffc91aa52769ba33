//! textstat テキスト統計ライブラリー
//!
//! 保存されたテキストから単語数・文字数・文数・段落数・段落ごとの最長単語を算出する。

/// 解析モジュール - 単語数、文数などを計算する純粋関数群
pub mod analysis;

/// エラーモジュール - ValidationError, StoreError 等のエラー型を定義
pub mod errors;

/// データモデルモジュール - TextRecord, NewText と入力ルールを定義
pub mod models;

/// 永続化モジュール - TextStore トレイトと SQLite 実装
pub mod store;

/// 再エクスポート
pub use analysis::{Metric, MetricValue};
pub use errors::{StoreError, TextstatError, TextstatResult, ValidationError};
pub use models::{DbId, NewText, TextRecord};
pub use store::{SqliteTextStore, TextStore};
