//! errors module
pub mod error_definition;

/// Re-export API error types
pub use error_definition::{ApiError, ApiErrorKind, INTERNAL_ERROR_MESSAGE, Result};
