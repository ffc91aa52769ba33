//! store module
pub mod sqlite_store;
pub mod text_store;

/// Re-export store types
pub use sqlite_store::SqliteTextStore;
pub use text_store::{TextStore, submit_text};
