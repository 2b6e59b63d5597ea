//! Tolerant deserialization for money/hours fields.
//!
//! The backend serializes DECIMAL columns inconsistently: plain numbers,
//! numeric strings ("8500000.00"), null, or "" for never-filled values.
//! Everything not parseable as a finite number collapses to 0.0 — render
//! code never sees NaN.

use serde::{Deserialize, Deserializer};

/// `#[serde(default, deserialize_with = "de_loose_f64")]` on f64 fields.
pub fn de_loose_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
        Null(Option<()>),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Num(n) if n.is_finite() => n,
        Raw::Num(_) => 0.0,
        Raw::Str(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Raw::Null(_) => 0.0,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "de_loose_f64")]
        amount: f64,
    }

    fn parse(json: &str) -> f64 {
        serde_json::from_str::<Row>(json).unwrap().amount
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"amount": 8500000}"#), 8500000.0);
        assert_eq!(parse(r#"{"amount": 1234.5}"#), 1234.5);
        assert_eq!(parse(r#"{"amount": "8500000.00"}"#), 8500000.0);
        assert_eq!(parse(r#"{"amount": " 42 "}"#), 42.0);
    }

    #[test]
    fn null_empty_and_garbage_become_zero() {
        assert_eq!(parse(r#"{"amount": null}"#), 0.0);
        assert_eq!(parse(r#"{"amount": ""}"#), 0.0);
        assert_eq!(parse(r#"{"amount": "abc"}"#), 0.0);
        assert_eq!(parse(r#"{}"#), 0.0);
    }
}
