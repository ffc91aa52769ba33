//! Service module

mod text_api_service;

pub use text_api_service::{TextApiService, parse_text_id};
