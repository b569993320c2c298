//! Tolerant deserializers for loosely typed JSON rows.
//!
//! Sales rows may come from hand-edited tables or older clients, so a numeric
//! column can arrive as a number, a numeric string, `null`, or garbage. None of
//! these should fail the whole response: unusable values become `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number or numeric string -> `Some(f64)`; anything else -> `None`
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Like [`lenient_f64`], but only whole numbers are accepted
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(integer_from_value))
}

/// `null` or a non-string value -> empty string
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Strings stay strings, numbers are stringified (order ids are sometimes numeric)
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn integer_from_value(value: &Value) -> Option<i64> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Some(i);
        }
    }
    let number = number_from_value(value)?;
    if number.fract() != 0.0 || number.abs() > i64::MAX as f64 {
        return None;
    }
    Some(number as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "lenient_i64")]
        qty: Option<i64>,
        #[serde(default, deserialize_with = "string_or_empty")]
        name: String,
        #[serde(default, deserialize_with = "optional_string")]
        order: Option<String>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let r = row(r#"{"amount": 12.5, "qty": "3"}"#);
        assert_eq!(r.amount, Some(12.5));
        assert_eq!(r.qty, Some(3));

        let r = row(r#"{"amount": " 99.90 ", "qty": 4.0}"#);
        assert_eq!(r.amount, Some(99.9));
        assert_eq!(r.qty, Some(4));
    }

    #[test]
    fn test_garbage_becomes_none() {
        let r = row(r#"{"amount": "abc", "qty": true}"#);
        assert_eq!(r.amount, None);
        assert_eq!(r.qty, None);

        let r = row(r#"{"amount": null, "qty": 2.5}"#);
        assert_eq!(r.amount, None);
        assert_eq!(r.qty, None);

        let r = row(r#"{"amount": "NaN", "qty": "inf"}"#);
        assert_eq!(r.amount, None);
        assert_eq!(r.qty, None);
    }

    #[test]
    fn test_missing_keys() {
        let r = row("{}");
        assert_eq!(r.amount, None);
        assert_eq!(r.qty, None);
        assert_eq!(r.name, "");
        assert_eq!(r.order, None);
    }

    #[test]
    fn test_string_fields() {
        let r = row(r#"{"name": null, "order": 12345}"#);
        assert_eq!(r.name, "");
        assert_eq!(r.order.as_deref(), Some("12345"));

        let r = row(r#"{"name": "Juan", "order": "a1b2c3d4e5"}"#);
        assert_eq!(r.name, "Juan");
        assert_eq!(r.order.as_deref(), Some("a1b2c3d4e5"));
    }
}
