//! analysis module
pub mod metric;
pub mod text_metrics;

/// Re-export analysis functions and metric types
pub use metric::{Metric, MetricValue};
pub use text_metrics::{
  count_characters, count_paragraphs, count_sentences, count_words, longest_word_in_paragraph,
};
