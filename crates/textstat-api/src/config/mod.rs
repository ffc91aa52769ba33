//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER};
pub use env::{Config, LogFormat, LogSettings};
