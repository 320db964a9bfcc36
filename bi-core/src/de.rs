//! Lenient field decoding for analytics payloads.
//!
//! The backend is a pandas-driven service: numbers occasionally arrive as
//! strings, labels may be numeric, and arrays can be `null`. Everything here
//! degrades to "missing" instead of failing the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Finite number from a JSON number or numeric string.
pub fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

/// Label text from a JSON string or number ("12" and 12 both give "12").
pub fn label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i.to_string()),
            None => n.as_f64().map(|f| f.to_string()),
        },
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First key of `keys` present on `obj` with a numeric value.
pub fn pick_number(obj: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| obj.get(*k).and_then(number))
}

/// First key of `keys` present on `obj` with a label-like value.
pub fn pick_label(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| obj.get(*k).and_then(label))
}

fn number_list(value: &Value) -> Vec<f64> {
    match value {
        Value::Array(items) => items.iter().map(|v| number(v).unwrap_or(0.0)).collect(),
        _ => Vec::new(),
    }
}

/// Serde-compatible deserializers for use with `#[serde(deserialize_with = "de::...")]`.
pub mod serde_fields {
    use super::*;

    /// 4.2 → Some(4.2), "4.2" → Some(4.2), null / "" / "n/a" → None
    pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(number(&value))
    }

    /// Like [`opt_f64`] but missing values become 0.
    pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(number(&value).unwrap_or(0.0))
    }

    /// "Rating" → Some("Rating"), 3 → Some("3"), null → None
    pub fn opt_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(label(&value))
    }

    /// Single label; missing or non-label values become "".
    pub fn labels_one<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(label(&value).unwrap_or_default())
    }

    /// Array of records; entries that fail to decode are skipped and a
    /// non-array value yields an empty list.
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Array of strings or numbers; non-label entries become "".
    pub fn labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items.iter().map(|v| label(v).unwrap_or_default()).collect(),
            _ => Vec::new(),
        })
    }

    /// Array of numbers; non-numeric entries become 0.
    pub fn numbers<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(number_list(&value))
    }

    /// Array of numeric arrays; a non-array row becomes an empty row.
    pub fn matrix<'de, D>(deserializer: D) -> Result<Vec<Vec<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(rows) => rows.iter().map(number_list).collect(),
            _ => Vec::new(),
        })
    }

    /// Object of named numeric arrays (`{"High": [..], "Low": [..]}`).
    pub fn series_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), number_list(v))).collect(),
            _ => BTreeMap::new(),
        })
    }

    /// Array of strings, dropping anything that is not text.
    pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// true / "true" / 1 → true, anything else → false
    pub fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(b) => b,
            Value::String(s) => s.eq_ignore_ascii_case("true"),
            Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_accepts_numeric_strings_and_rejects_junk() {
        assert_eq!(number(&json!(4.5)), Some(4.5));
        assert_eq!(number(&json!(" 12 ")), Some(12.0));
        assert_eq!(number(&json!("n/a")), None);
        assert_eq!(number(&json!(null)), None);
        assert_eq!(number(&json!([1])), None);
    }

    #[test]
    fn label_renders_integers_without_fraction() {
        assert_eq!(label(&json!(132_584)), Some("132584".to_string()));
        assert_eq!(label(&json!(22.5)), Some("22.5".to_string()));
        assert_eq!(label(&json!("Low")), Some("Low".to_string()));
        assert_eq!(label(&json!(null)), None);
    }

    #[test]
    fn pick_prefers_first_present_key() {
        let obj = json!({"name": "Tacos", "Rating_Count": "17", "count": 3});
        assert_eq!(pick_label(&obj, &["Name", "name"]), Some("Tacos".to_string()));
        assert_eq!(pick_number(&obj, &["Rating_Count", "count"]), Some(17.0));
        assert_eq!(pick_number(&obj, &["missing"]), None);
    }
}
