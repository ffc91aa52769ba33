//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tokio::signal;
use tower_http::trace::TraceLayer;

use super::handlers::{
  get_character_count, get_longest_words, get_paragraph_count, get_sentence_count,
  get_word_count, health_check, post_text,
};
use super::state::AppState;
use crate::errors::ApiError;

/// テキスト関連のルート（`/api` 配下にネストされる）
pub fn text_routes() -> Router<AppState> {
  Router::new()
    .route("/text", post(post_text))
    .route("/text/{id}/words", get(get_word_count))
    .route("/text/{id}/characters", get(get_character_count))
    .route("/text/{id}/sentences", get(get_sentence_count))
    .route("/text/{id}/paragraphs", get(get_paragraph_count))
    .route("/text/{id}/longest-words", get(get_longest_words))
}

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .nest("/api", text_routes())
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// Ctrl+C または SIGTERM を受けると処理中のリクエストを待って終了する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  tracing::info!("サーバーを停止しました");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!(error = %e, "Ctrl+C ハンドラーの登録に失敗しました");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "SIGTERM ハンドラーの登録に失敗しました");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => tracing::info!("Ctrl+C を受信しました。終了します"),
    _ = terminate => tracing::info!("SIGTERM を受信しました。終了します"),
  }
}
