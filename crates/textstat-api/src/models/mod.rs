//! モデルモジュール

mod request;
mod response;

pub use request::CreateTextRequest;
pub use response::MetricResponse;
