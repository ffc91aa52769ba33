//! Text metrics over a single string.
//!
//! Every function here is pure: no I/O, no shared mutable state, the same
//! input always gives the same output. Splitting follows "runs of separator"
//! semantics, so repeated separators never yield extra fragments; empty
//! fragments are dropped by the counting functions.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of whitespace (word separator).
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Runs of sentence terminators.
static SENTENCE_TERMINATORS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Runs of newlines (paragraph separator).
static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));

/// Counts non-empty fragments produced by splitting `text` on `separator`.
fn count_fragments(separator: &Regex, text: &str) -> usize {
  separator.split(text).filter(|fragment| !fragment.is_empty()).count()
}

/// Number of whitespace-separated words.
///
/// ```
/// assert_eq!(textstat::analysis::count_words("  a   b  "), 2);
/// ```
pub fn count_words(text: &str) -> usize {
  count_fragments(&WHITESPACE, text)
}

/// Number of non-whitespace characters.
pub fn count_characters(text: &str) -> usize {
  text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Number of fragments between runs of `.`, `!` and `?`.
///
/// A fragment made only of whitespace still counts, so `"A. "` has two
/// sentences while `"A."` has one.
pub fn count_sentences(text: &str) -> usize {
  count_fragments(&SENTENCE_TERMINATORS, text)
}

/// Number of fragments between runs of newlines.
pub fn count_paragraphs(text: &str) -> usize {
  count_fragments(&NEWLINES, text)
}

/// Longest word of each paragraph, in input order.
///
/// Paragraphs come from splitting on runs of newlines without dropping empty
/// fragments, so `""` gives `[""]` and a trailing newline gives a trailing
/// `""`. Within a paragraph only a strictly longer word replaces the current
/// one, so the first word of maximal length wins. A paragraph with no words
/// yields `""`.
pub fn longest_word_in_paragraph(text: &str) -> Vec<String> {
  NEWLINES.split(text).map(longest_word).map(str::to_string).collect()
}

fn longest_word(paragraph: &str) -> &str {
  WHITESPACE.split(paragraph).fold("", |longest, word| {
    if word.chars().count() > longest.chars().count() { word } else { longest }
  })
}
