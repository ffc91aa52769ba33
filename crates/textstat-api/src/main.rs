//! textstat-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::util::SubscriberInitExt;

use textstat::SqliteTextStore;
use textstat_api::ApiError;
use textstat_api::api::AppState;
use textstat_api::api::run_server;
use textstat_api::config::Config;
use textstat_api::logging::build_subscriber;
use textstat_api::service::TextApiService;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // .env があれば読み込む（無くてもよい）
  dotenvy::dotenv().ok();

  // 設定の読み込み
  let config = Config::from_env()?;

  // ロギングの初期化
  build_subscriber(&config.log)?
    .try_init()
    .map_err(|e| ApiError::config(format!("ロガーの初期化に失敗しました: {}", e)))?;
  tracing::info!(log_format = ?config.log.format, "設定を読み込みました");

  // ストアの初期化
  let store = SqliteTextStore::connect(&config.database_url).await?;
  let service = TextApiService::new(Arc::new(store));
  tracing::info!("テキストストアを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
