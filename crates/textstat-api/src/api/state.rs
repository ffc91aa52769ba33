//! API State Definition

use crate::config::Config;
use crate::service::TextApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Text statistics service (wraps the store)
  pub service: TextApiService,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: TextApiService) -> Self {
    Self { config, service }
  }
}
