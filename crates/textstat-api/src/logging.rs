//! ロギング初期化
//!
//! `build_subscriber` は subscriber を組み立てて返すだけで、登録は呼び出し側が行う。
//! サーバーは `try_init()` でプロセス全体に、テストは `tracing::subscriber::with_default`
//! でスコープ限定に設定できる。

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

use crate::config::{DEFAULT_LOG_FILTER, LogFormat, LogSettings};
use crate::errors::{ApiError, Result};

/// 設定に従って subscriber を構築する
///
/// - 標準出力: `settings.format` の形式
/// - ファイル: 同じ形式で追記（ANSI カラーなし）
/// - フィルター: `RUST_LOG`、未設定なら `info`
///
/// # Errors
/// ログファイルを開けない場合に設定エラーを返す
pub fn build_subscriber(settings: &LogSettings) -> Result<Box<dyn Subscriber + Send + Sync>> {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

  let file = settings.file.as_deref().map(open_log_file).transpose()?;
  let registry = tracing_subscriber::registry().with(filter);

  let subscriber: Box<dyn Subscriber + Send + Sync> = match settings.format {
    LogFormat::Json => Box::new(
      registry
        .with(fmt::layer().json())
        .with(file.map(|f| fmt::layer().json().with_ansi(false).with_writer(Mutex::new(f)))),
    ),
    LogFormat::Pretty => Box::new(
      registry
        .with(fmt::layer().pretty())
        .with(file.map(|f| fmt::layer().with_ansi(false).with_writer(Mutex::new(f)))),
    ),
  };

  Ok(subscriber)
}

fn open_log_file(path: &Path) -> Result<File> {
  OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
    ApiError::config(format!("ログファイルを開けません: {}: {}", path.display(), e))
  })
}
