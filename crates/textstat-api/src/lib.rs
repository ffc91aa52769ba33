//! textstat-api crate
//!
//! Web server storing text blobs and serving their statistics as HTTP API.
//!
//! ## Endpoints
//! - `POST /api/text` - Store a text
//! - `GET /api/text/{id}/words` - Word count
//! - `GET /api/text/{id}/characters` - Character count (whitespace excluded)
//! - `GET /api/text/{id}/sentences` - Sentence count
//! - `GET /api/text/{id}/paragraphs` - Paragraph count
//! - `GET /api/text/{id}/longest-words` - Longest word of each paragraph
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:3000/api/text \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "The quick brown fox. The lazy dog."}'
//! curl http://127.0.0.1:3000/api/text/1/words
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{CreateTextRequest, MetricResponse};
pub use service::TextApiService;
