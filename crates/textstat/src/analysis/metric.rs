//! Metric Definition
//!
//! Names the five analyses so the API layer can route, compute and
//! serialize them uniformly.

use std::fmt;

use serde::Serialize;

use super::text_metrics::{
  count_characters, count_paragraphs, count_sentences, count_words, longest_word_in_paragraph,
};

/// Analysis exposed for a stored text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
  /// Whitespace-separated words
  Words,
  /// Non-whitespace characters
  Characters,
  /// Fragments between `.`, `!`, `?`
  Sentences,
  /// Fragments between newlines
  Paragraphs,
  /// Longest word of each paragraph
  LongestWords,
}

impl Metric {
  /// All metrics, in route order.
  pub const ALL: [Metric; 5] =
    [Self::Words, Self::Characters, Self::Sentences, Self::Paragraphs, Self::LongestWords];

  /// JSON field name the result is keyed by
  #[must_use]
  pub fn field_name(&self) -> &'static str {
    match self {
      Self::Words => "wordCount",
      Self::Characters => "characterCount",
      Self::Sentences => "sentenceCount",
      Self::Paragraphs => "paragraphCount",
      Self::LongestWords => "longestWords",
    }
  }

  /// Trailing path segment of the metric's route (`/text/{id}/<segment>`)
  #[must_use]
  pub fn path_segment(&self) -> &'static str {
    match self {
      Self::Words => "words",
      Self::Characters => "characters",
      Self::Sentences => "sentences",
      Self::Paragraphs => "paragraphs",
      Self::LongestWords => "longest-words",
    }
  }

  /// Runs the analysis on `text`
  #[must_use]
  pub fn compute(&self, text: &str) -> MetricValue {
    match self {
      Self::Words => MetricValue::Count(count_words(text)),
      Self::Characters => MetricValue::Count(count_characters(text)),
      Self::Sentences => MetricValue::Count(count_sentences(text)),
      Self::Paragraphs => MetricValue::Count(count_paragraphs(text)),
      Self::LongestWords => MetricValue::Words(longest_word_in_paragraph(text)),
    }
  }
}

impl fmt::Display for Metric {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.path_segment())
  }
}

/// Result of a [`Metric`] computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
  /// Scalar count
  Count(usize),
  /// One word per paragraph
  Words(Vec<String>),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn compute_dispatches_to_analysis() {
    let text = "a bb. ccc!\n\ndddd";
    assert_eq!(Metric::Words.compute(text), MetricValue::Count(4));
    assert_eq!(Metric::Characters.compute(text), MetricValue::Count(12));
    assert_eq!(Metric::Sentences.compute(text), MetricValue::Count(3));
    assert_eq!(Metric::Paragraphs.compute(text), MetricValue::Count(2));
    assert_eq!(
      Metric::LongestWords.compute(text),
      MetricValue::Words(vec!["ccc!".to_string(), "dddd".to_string()])
    );
  }

  #[test]
  fn field_names_are_camel_case() {
    let names: Vec<_> = Metric::ALL.iter().map(Metric::field_name).collect();
    assert_eq!(
      names,
      vec!["wordCount", "characterCount", "sentenceCount", "paragraphCount", "longestWords"]
    );
  }

  #[test]
  fn display_is_route_segment() {
    assert_eq!(Metric::Words.to_string(), "words");
    assert_eq!(Metric::LongestWords.to_string(), "longest-words");
  }

  #[test]
  fn metric_value_serializes_untagged() {
    assert_eq!(serde_json::to_string(&MetricValue::Count(3)).unwrap(), "3");
    assert_eq!(
      serde_json::to_string(&MetricValue::Words(vec!["a".into(), "".into()])).unwrap(),
      r#"["a",""]"#
    );
  }
}
