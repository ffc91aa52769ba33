//! Response Model Definition

use serde::ser::{Serialize, SerializeMap, Serializer};
use textstat::{Metric, MetricValue};

/// Analysis Response
///
/// Serialized as a single-field object keyed by the metric's field name,
/// e.g. `{"wordCount": 16}` or `{"longestWords": ["quick", "slept"]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricResponse {
  /// Computed metric
  pub metric: Metric,
  /// Result value
  pub value: MetricValue,
}

impl MetricResponse {
  /// Computes `metric` over `text`
  #[must_use]
  pub fn compute(metric: Metric, text: &str) -> Self {
    Self { metric, value: metric.compute(text) }
  }
}

impl Serialize for MetricResponse {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(self.metric.field_name(), &self.value)?;
    map.end()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn count_response_serialization() {
    let response = MetricResponse::compute(Metric::Words, "  a   b  ");
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"wordCount":2}"#);
  }

  #[test]
  fn longest_words_response_serialization() {
    let response = MetricResponse::compute(Metric::LongestWords, "a bb\nccc d");
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, serde_json::json!({ "longestWords": ["bb", "ccc"] }));
  }

  #[test]
  fn every_metric_uses_its_field_name() {
    for metric in Metric::ALL {
      let json = serde_json::to_value(MetricResponse::compute(metric, "abc")).unwrap();
      let object = json.as_object().expect("object");
      assert_eq!(object.len(), 1);
      assert!(object.contains_key(metric.field_name()));
    }
  }
}
