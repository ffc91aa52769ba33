//! API設定の定数定義

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost の標準ポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// デフォルトのデータベース URL
///
/// カレントディレクトリの SQLite ファイル。存在しなければ作成される。
pub const DEFAULT_DATABASE_URL: &str = "sqlite://textstat.db";

/// デフォルトのログファイル
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// `RUST_LOG` 未設定時のログフィルター
pub const DEFAULT_LOG_FILTER: &str = "info";
