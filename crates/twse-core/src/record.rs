//! Flat upstream records.
//!
//! The OpenAPI returns arrays of flat objects whose field names vary per
//! endpoint (and per localized schema), so a record is kept as an ordered
//! map rather than a typed struct.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// One read-only row returned by an endpoint.
///
/// Field order is the order the upstream JSON used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns the raw value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a field only when it holds a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns the display text of a field, or `default` when the field is missing.
    pub fn text_or<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str> {
        self.0.get(key).map_or(Cow::Borrowed(default), display_value)
    }

    /// Returns true if the record has the field, whatever its value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates fields in upstream order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the record, returning the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Normalizes a decoded response body into a list of records.
    ///
    /// Arrays keep their object elements, a single non-empty object becomes a
    /// one-element list, and everything else (null, scalars, `{}`) yields no
    /// records.
    pub fn normalize(value: Value) -> Vec<Record> {
        match value {
            Value::Array(items) => {
                let total = items.len();
                let records: Vec<Record> = items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Object(map) => Some(Record(map)),
                        _ => None,
                    })
                    .collect();
                if records.len() < total {
                    debug!(skipped = total - records.len(), "ignoring non-object array elements");
                }
                records
            }
            Value::Object(map) if !map.is_empty() => vec![Record(map)],
            _ => Vec::new(),
        }
    }

    /// Parses a response body and normalizes it.
    ///
    /// An empty or whitespace-only body is "no data", not a parse error.
    pub fn list_from_json(body: &str) -> Result<Vec<Record>, serde_json::Error> {
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str::<Value>(body).map(Self::normalize)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_record(self))
    }
}

/// Renders a field value as plain text.
///
/// Strings are shown verbatim, `null` as nothing, and nested values as compact JSON.
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_array_keeps_objects_in_order() {
        let records = Record::normalize(json!([
            {"Code": "2330"},
            "stray",
            {"Code": "2317"},
        ]));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get_str("Code"), Some("2330"));
        assert_eq!(records[1].get_str("Code"), Some("2317"));
    }

    #[test]
    fn test_normalize_single_object() {
        let records = Record::normalize(json!({"Code": "2330"}));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_normalize_empty_shapes() {
        assert!(Record::normalize(json!(null)).is_empty());
        assert!(Record::normalize(json!({})).is_empty());
        assert!(Record::normalize(json!([])).is_empty());
        assert!(Record::normalize(json!("text")).is_empty());
    }

    #[test]
    fn test_list_from_json_empty_body() {
        assert!(Record::list_from_json("").unwrap().is_empty());
        assert!(Record::list_from_json("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_list_from_json_invalid() {
        assert!(Record::list_from_json("<html>503</html>").is_err());
    }

    #[test]
    fn test_preserves_field_order() {
        let records = Record::list_from_json(r#"[{"z":"1","a":"2","m":"3"}]"#).unwrap();
        let keys: Vec<_> = records[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_text_or() {
        let record: Record = [("Name", json!("TSMC")), ("Volume", json!(1200)), ("Note", json!(null))]
            .into_iter()
            .collect();
        assert_eq!(record.text_or("Name", "N/A"), "TSMC");
        assert_eq!(record.text_or("Volume", "N/A"), "1200");
        assert_eq!(record.text_or("Note", "N/A"), "");
        assert_eq!(record.text_or("Missing", "N/A"), "N/A");
    }
}
