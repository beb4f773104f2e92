//! Cell serialization.
//!
//! Every raw value becomes a [`CellValue`]. Nothing here returns an error: a
//! value that cannot be represented cleanly degrades to a string so one bad
//! cell never blocks the rest of the table.

use super::numeric::{format_number, round_to};
use super::types::{CellValue, RenderHint, ValueKind};
use crate::config::Separators;
use crate::dataset::{RawValue, Temporal};
use serde_json::Value;
use std::borrow::Cow;

/// Nesting depth beyond which fallback text is elided.
const MAX_FALLBACK_DEPTH: usize = 32;

/// Column-level settings shared by every cell of one column.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CellContext {
    pub value_kind: ValueKind,
    pub render_hint: RenderHint,
    pub precision: u32,
    pub separators: Separators,
    pub locale_formatting: bool,
}

/// Serialize one cell according to its column's context.
pub(crate) fn serialize_cell(value: &RawValue, ctx: &CellContext) -> CellValue {
    match value {
        _ if value.is_missing() => CellValue::Null,
        RawValue::Number(n) if !n.is_finite() => {
            tracing::debug!(value = %n, "non-finite number serialized as null");
            CellValue::Null
        }
        RawValue::Number(n) => match ctx.value_kind {
            ValueKind::Numeric => CellValue::Number(round_to(*n, ctx.precision)),
            _ => CellValue::Text(format_number(*n, ctx.precision, ctx.separators)),
        },
        RawValue::Temporal(t) => CellValue::Text(temporal_text(t, ctx.locale_formatting)),
        RawValue::Text(s) => {
            let s = s.trim();
            if ctx.render_hint == RenderHint::RawHtmlPassthrough {
                CellValue::Html(s.to_string())
            } else {
                CellValue::Text(escape_html(s).into_owned())
            }
        }
        RawValue::Other(v) => {
            let text = fallback_text(v);
            tracing::debug!(fallback = %text, "cell serialized through string fallback");
            CellValue::Text(escape_html(&text).into_owned())
        }
        RawValue::Null => CellValue::Null,
    }
}

fn temporal_text(t: &Temporal, locale_formatting: bool) -> String {
    if locale_formatting {
        t.to_display()
    } else {
        t.to_iso8601()
    }
}

/// Structural text for values with no dedicated representation.
pub(crate) fn fallback_text(value: &Value) -> String {
    let mut out = String::new();
    write_fallback(value, 0, &mut out);
    out
}

fn write_fallback(value: &Value, depth: usize, out: &mut String) {
    if depth >= MAX_FALLBACK_DEPTH {
        out.push('…');
        return;
    }
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_fallback(item, depth + 1, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push_str(": ");
                write_fallback(item, depth + 1, out);
            }
            out.push('}');
        }
        Value::String(s) => out.push_str(s),
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Escape HTML special characters.
///
/// Returns a borrowed reference if no escaping is needed.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if s.contains(['&', '<', '>', '"', '\'']) {
        let mut escaped = String::with_capacity(s.len() + 8);
        for c in s.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#x27;"),
                _ => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(value_kind: ValueKind, render_hint: RenderHint) -> CellContext {
        CellContext {
            value_kind,
            render_hint,
            precision: 2,
            separators: Separators::CANONICAL,
            locale_formatting: false,
        }
    }

    #[test]
    fn test_numbers_in_numeric_column_stay_numbers() {
        let c = ctx(ValueKind::Numeric, RenderHint::Plain);
        assert_eq!(
            serialize_cell(&RawValue::from(1.23456), &c),
            CellValue::Number(1.23)
        );
    }

    #[test]
    fn test_numbers_in_textual_column_become_text() {
        let c = ctx(ValueKind::Textual, RenderHint::Plain);
        assert_eq!(
            serialize_cell(&RawValue::from(100.12345), &c),
            CellValue::Text("100.12".into())
        );
    }

    #[test]
    fn test_missing_values_are_null() {
        let c = ctx(ValueKind::Numeric, RenderHint::NumericColored);
        assert_eq!(serialize_cell(&RawValue::Null, &c), CellValue::Null);
        assert_eq!(serialize_cell(&RawValue::from(f64::NAN), &c), CellValue::Null);
        assert_eq!(
            serialize_cell(&RawValue::from(f64::INFINITY), &c),
            CellValue::Null
        );
        // the text "null" is not the null sentinel
        let c = ctx(ValueKind::Textual, RenderHint::Plain);
        assert_eq!(
            serialize_cell(&RawValue::from("null"), &c),
            CellValue::Text("null".into())
        );
    }

    #[test]
    fn test_temporal_formats() {
        let t = RawValue::Temporal(Temporal::parse("2024-05-06 07:08:09").unwrap());
        let mut c = ctx(ValueKind::Temporal, RenderHint::Plain);
        assert_eq!(
            serialize_cell(&t, &c),
            CellValue::Text("2024-05-06T07:08:09".into())
        );
        c.locale_formatting = true;
        assert_eq!(
            serialize_cell(&t, &c),
            CellValue::Text("2024-05-06 07:08:09".into())
        );
    }

    #[test]
    fn test_text_is_escaped_and_trimmed() {
        let c = ctx(ValueKind::Textual, RenderHint::Plain);
        assert_eq!(
            serialize_cell(&RawValue::from("  <b>bold</b> "), &c),
            CellValue::Text("&lt;b&gt;bold&lt;/b&gt;".into())
        );
    }

    #[test]
    fn test_raw_html_passes_through() {
        let c = ctx(ValueKind::Textual, RenderHint::RawHtmlPassthrough);
        assert_eq!(
            serialize_cell(&RawValue::from("<b>bold</b>"), &c),
            CellValue::Html("<b>bold</b>".into())
        );
    }

    #[test]
    fn test_other_values_fall_back_to_text() {
        let c = ctx(ValueKind::Textual, RenderHint::Plain);
        assert_eq!(
            serialize_cell(&RawValue::Other(json!(false)), &c),
            CellValue::Text("false".into())
        );
        assert_eq!(
            serialize_cell(&RawValue::Other(json!({"A": [1, 2, [4, 5]]})), &c),
            CellValue::Text("{&quot;A&quot;: [1, 2, [4, 5]]}".into())
        );
    }

    #[test]
    fn test_fallback_text_elides_deep_nesting() {
        let mut value = json!(1);
        for _ in 0..100 {
            value = json!([value]);
        }
        let text = fallback_text(&value);
        assert!(text.contains('…'));
        assert_eq!(text.matches('[').count(), MAX_FALLBACK_DEPTH);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert!(matches!(escape_html("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }
}
