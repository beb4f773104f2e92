//! Raw cell values as they arrive from the input table.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::fmt;

/// Date/time-like cell content.
#[derive(Debug, Clone, PartialEq)]
pub enum Temporal {
    /// Calendar date without a time of day.
    Date(NaiveDate),
    /// Date and time without an offset; no timezone is assumed.
    DateTime(NaiveDateTime),
    /// Date and time with an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
}

impl Temporal {
    /// Canonical ISO-8601 text, keeping exactly the precision provided.
    pub fn to_iso8601(&self) -> String {
        match self {
            Temporal::Date(d) => d.format("%Y-%m-%d").to_string(),
            Temporal::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            Temporal::Zoned(dt) => dt.to_rfc3339(),
        }
    }

    /// Human-oriented display text (space separated, no fractional seconds).
    pub fn to_display(&self) -> String {
        match self {
            Temporal::Date(d) => d.format("%Y-%m-%d").to_string(),
            Temporal::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Temporal::Zoned(dt) => dt.format("%Y-%m-%d %H:%M:%S %:z").to_string(),
        }
    }

    /// Parse common date/time spellings.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.f]`, `YYYY-MM-DD HH:MM:SS[.f]`
    /// and `YYYY-MM-DD`.
    pub fn parse(text: &str) -> Option<Temporal> {
        let text = text.trim();
        // cheap rejection before trying every format
        if text.len() < 10 || !text.as_bytes()[0].is_ascii_digit() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(Temporal::Zoned(dt));
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
                return Some(Temporal::DateTime(dt));
            }
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(Temporal::Date)
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// A single input cell of unknown runtime type.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Any numeric value, including NaN and infinities.
    Number(f64),
    /// Plain text.
    Text(String),
    /// Date/time-like value.
    Temporal(Temporal),
    /// Missing value.
    Null,
    /// Anything else: booleans, arrays, objects.
    Other(Value),
}

impl RawValue {
    /// True for `Null` and for NaN numbers.
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Convert a JSON value, recognizing date/time strings when `parse_dates` is set.
    pub fn from_json(value: Value, parse_dates: bool) -> RawValue {
        match value {
            Value::Null => RawValue::Null,
            Value::Number(n) => match n.as_f64() {
                Some(f) => RawValue::Number(f),
                None => RawValue::Other(Value::Number(n)),
            },
            Value::String(s) => {
                if parse_dates && let Some(t) = Temporal::parse(&s) {
                    return RawValue::Temporal(t);
                }
                RawValue::Text(s)
            }
            other => RawValue::Other(other),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<Temporal> for RawValue {
    fn from(t: Temporal) -> Self {
        RawValue::Temporal(t)
    }
}

impl From<NaiveDate> for RawValue {
    fn from(d: NaiveDate) -> Self {
        RawValue::Temporal(Temporal::Date(d))
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(dt: NaiveDateTime) -> Self {
        RawValue::Temporal(Temporal::DateTime(dt))
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Other(Value::Bool(b))
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_temporal_parse_formats() {
        assert!(matches!(
            Temporal::parse("2024-03-01"),
            Some(Temporal::Date(_))
        ));
        assert!(matches!(
            Temporal::parse("2024-03-01 12:30:00"),
            Some(Temporal::DateTime(_))
        ));
        assert!(matches!(
            Temporal::parse("2024-03-01T12:30:00.250"),
            Some(Temporal::DateTime(_))
        ));
        assert!(matches!(
            Temporal::parse("2024-03-01T12:30:00+02:00"),
            Some(Temporal::Zoned(_))
        ));
        assert_eq!(Temporal::parse("Premium"), None);
        assert_eq!(Temporal::parse("2024-13-45"), None);
        assert_eq!(Temporal::parse("12"), None);
    }

    #[test]
    fn test_temporal_iso_output() {
        let t = Temporal::parse("2024-03-01 12:30:00").unwrap();
        assert_eq!(t.to_iso8601(), "2024-03-01T12:30:00");
        assert_eq!(t.to_display(), "2024-03-01 12:30:00");

        let t = Temporal::parse("2024-03-01T12:30:00.5").unwrap();
        assert_eq!(t.to_iso8601(), "2024-03-01T12:30:00.500");

        let t = Temporal::parse("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(t.to_iso8601(), "2024-03-01T12:30:00+02:00");
    }

    #[test]
    fn test_missing_values() {
        assert!(RawValue::Null.is_missing());
        assert!(RawValue::Number(f64::NAN).is_missing());
        assert!(!RawValue::Number(0.0).is_missing());
        assert!(!RawValue::Text(String::new()).is_missing());
    }

    #[test]
    fn test_from_json() {
        assert_eq!(RawValue::from_json(json!(null), true), RawValue::Null);
        assert_eq!(RawValue::from_json(json!(1.5), true), RawValue::Number(1.5));
        assert_eq!(RawValue::from_json(json!("a"), true), RawValue::Text("a".into()));
        assert!(matches!(
            RawValue::from_json(json!("2024-01-01"), true),
            RawValue::Temporal(_)
        ));
        assert_eq!(
            RawValue::from_json(json!("2024-01-01"), false),
            RawValue::Text("2024-01-01".into())
        );
        assert_eq!(
            RawValue::from_json(json!(true), true),
            RawValue::Other(json!(true))
        );
        assert_eq!(
            RawValue::from_json(json!({"a": [1]}), true),
            RawValue::Other(json!({"a": [1]}))
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RawValue::from(None::<f64>), RawValue::Null);
        assert_eq!(RawValue::from(Some("x")), RawValue::Text("x".into()));
    }
}
