//! Create payload validation
//!
//! `TEXT_RULES` is evaluated in order against the whole JSON body; the first
//! rule that fails becomes the [`ValidationError`]. A [`NewText`] only exists
//! once every rule has passed.

use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// Minimum text length (characters)
pub const MIN_TEXT_LENGTH: usize = 3;

/// Maximum text length (characters)
pub const MAX_TEXT_LENGTH: usize = 255;

/// Single constraint on the create payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRule {
  /// Body must be a JSON object
  IsObject,
  /// `text` key must be present
  Required,
  /// `text` must be a JSON string (`null` included in the failures)
  IsString,
  /// `text` must not be `""`
  NonEmpty,
  /// `text` has at least this many characters
  MinLength(usize),
  /// `text` has at most this many characters
  MaxLength(usize),
  /// Body has no key other than `text`
  NoUnknownKeys,
}

/// Rules applied to the body, in evaluation order.
pub const TEXT_RULES: &[TextRule] = &[
  TextRule::IsObject,
  TextRule::Required,
  TextRule::IsString,
  TextRule::NonEmpty,
  TextRule::MinLength(MIN_TEXT_LENGTH),
  TextRule::MaxLength(MAX_TEXT_LENGTH),
  TextRule::NoUnknownKeys,
];

impl TextRule {
  /// Name of the offending field when `body` violates this rule.
  ///
  /// Rules on `text` pass vacuously when an earlier rule already covers the
  /// failure (no object, no key, not a string).
  #[must_use]
  pub fn violation(&self, body: &Value) -> Option<String> {
    let Some(object) = body.as_object() else {
      return (*self == Self::IsObject).then(|| "value".to_string());
    };
    let field = || NewText::FIELD.to_string();
    let text = object.get(NewText::FIELD);
    let length = || text.and_then(Value::as_str).map(|s| s.chars().count());

    match self {
      Self::IsObject => None,
      Self::Required => text.is_none().then(field),
      Self::IsString => text.is_some_and(|v| !v.is_string()).then(field),
      Self::NonEmpty => (length() == Some(0)).then(field),
      Self::MinLength(limit) => length().is_some_and(|len| len < *limit).then(field),
      Self::MaxLength(limit) => length().is_some_and(|len| len > *limit).then(field),
      Self::NoUnknownKeys => first_unknown_key(object).map(str::to_string),
    }
  }
}

fn first_unknown_key(object: &Map<String, Value>) -> Option<&str> {
  object.keys().map(String::as_str).find(|key| *key != NewText::FIELD)
}

/// Validated text ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewText {
  text: String,
}

impl NewText {
  /// Field name used in validation messages
  pub const FIELD: &'static str = "text";

  /// Validates a create payload (`{ "text": "..." }`).
  ///
  /// # Errors
  /// Returns the first rule of [`TEXT_RULES`] that `body` violates
  pub fn parse(body: &Value) -> Result<Self, ValidationError> {
    for rule in TEXT_RULES {
      if let Some(field) = rule.violation(body) {
        return Err(ValidationError::new(field, *rule));
      }
    }

    match body.get(Self::FIELD).and_then(Value::as_str) {
      Some(text) => Ok(Self { text: text.to_string() }),
      None => Err(ValidationError::new(Self::FIELD, TextRule::Required)),
    }
  }

  /// Validated text
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.text
  }
}

impl TryFrom<&str> for NewText {
  type Error = ValidationError;

  fn try_from(text: &str) -> Result<Self, Self::Error> {
    let mut body = Map::new();
    body.insert(Self::FIELD.to_string(), Value::String(text.to_string()));
    Self::parse(&Value::Object(body))
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn rule_of(body: Value) -> TextRule {
    NewText::parse(&body).unwrap_err().rule
  }

  #[test]
  fn accepts_text_within_bounds() {
    let new_text = NewText::parse(&json!({ "text": "abc" })).unwrap();
    assert_eq!(new_text.as_str(), "abc");

    let longest = "x".repeat(MAX_TEXT_LENGTH);
    assert!(NewText::try_from(longest.as_str()).is_ok());
  }

  #[test]
  fn non_object_bodies_are_type_errors() {
    for body in [json!(["abc def"]), json!([]), json!("abc def"), json!(42), Value::Null] {
      let err = NewText::parse(&body).unwrap_err();
      assert_eq!(err.rule, TextRule::IsObject, "body = {body}");
      assert_eq!(err.message(), "\"value\" must be of type object");
    }
  }

  #[test]
  fn missing_text_is_required_error() {
    assert_eq!(rule_of(json!({})), TextRule::Required);
  }

  #[test]
  fn null_and_non_string_are_type_errors() {
    let err = NewText::parse(&json!({ "text": null })).unwrap_err();
    assert_eq!(err.rule, TextRule::IsString);
    assert_eq!(err.message(), "\"text\" should be a type of 'text'");

    assert_eq!(rule_of(json!({ "text": 42 })), TextRule::IsString);
    assert_eq!(rule_of(json!({ "text": ["abc"] })), TextRule::IsString);
  }

  #[test]
  fn empty_string_reports_empty_before_min_length() {
    assert_eq!(rule_of(json!({ "text": "" })), TextRule::NonEmpty);
  }

  #[test]
  fn too_short_and_too_long() {
    let err = NewText::try_from("Hi").unwrap_err();
    assert_eq!(err.rule, TextRule::MinLength(3));
    assert_eq!(err.message(), "\"text\" should have a minimum length of 3");

    let too_long = "x".repeat(MAX_TEXT_LENGTH + 1);
    assert_eq!(
      NewText::try_from(too_long.as_str()).unwrap_err().rule,
      TextRule::MaxLength(MAX_TEXT_LENGTH)
    );
  }

  #[test]
  fn unknown_key_is_rejected_by_name() {
    let err = NewText::parse(&json!({ "text": "abc", "extra": 1 })).unwrap_err();
    assert_eq!(err.rule, TextRule::NoUnknownKeys);
    assert_eq!(err.field, "extra");
    assert_eq!(err.message(), "\"extra\" is not allowed");
  }

  #[test]
  fn text_rules_fail_before_unknown_keys() {
    assert_eq!(rule_of(json!({ "extra": 1 })), TextRule::Required);
    assert_eq!(rule_of(json!({ "text": "Hi", "extra": 1 })), TextRule::MinLength(3));
  }

  #[test]
  fn length_is_measured_in_characters() {
    // 3 chars, 9 bytes
    assert!(NewText::try_from("東京都").is_ok());
    let multibyte = "あ".repeat(MAX_TEXT_LENGTH);
    assert!(NewText::try_from(multibyte.as_str()).is_ok());
  }

  #[test]
  fn whitespace_text_is_not_trimmed() {
    assert!(NewText::try_from("   ").is_ok());
  }
}
