//! Number formatting, colored markup, and markup-tolerant number parsing.
//!
//! These mirror the browser-side `render_num` renderer and `num-html` sort
//! type shipped in the bundled template, so the same display strings can be
//! produced and ordered from Rust.

use crate::config::Separators;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

/// CSS class for negative values.
pub const NEGATIVE_CLASS: &str = "num-neg";
/// CSS class for zero and positive values.
pub const NON_NEGATIVE_CLASS: &str = "num-pos";

const NEGATIVE_COLOR: &str = "#c0392b";
const NON_NEGATIVE_COLOR: &str = "#1e7b34";

/// Round to `precision` fractional digits, leaving values that would overflow untouched.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    // normalize -0.0 so it displays and colors as zero
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format a number with fixed fractional digits and the given separators.
///
/// ```
/// use df2tables::config::Separators;
/// use df2tables::model::format_number;
///
/// let seps = Separators { thousands: Some(','), decimal: '.' };
/// assert_eq!(format_number(1234.5, 2, seps), "1,234.50");
/// assert_eq!(format_number(-0.333, 1, Separators::CANONICAL), "-0.3");
/// ```
pub fn format_number(value: f64, precision: u32, separators: Separators) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let rounded = round_to(value, precision);
    let text = format!("{:.*}", precision as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    match separators.thousands {
        Some(sep) => {
            let digits = int_part.len();
            for (i, ch) in int_part.chars().enumerate() {
                if i > 0 && (digits - i) % 3 == 0 {
                    out.push(sep);
                }
                out.push(ch);
            }
        }
        None => out.push_str(int_part),
    }
    if let Some(frac) = frac_part {
        out.push(separators.decimal);
        out.push_str(frac);
    }
    out
}

/// Wrap a formatted number in a sign-dependent colored span.
pub fn colored_markup(value: f64, precision: u32, separators: Separators) -> String {
    let text = format_number(value, precision, separators);
    if value.is_nan() {
        return format!("<span class=\"num-nan\">{}</span>", text);
    }
    let (class, color) = if round_to(value, precision) < 0.0 {
        (NEGATIVE_CLASS, NEGATIVE_COLOR)
    } else {
        (NON_NEGATIVE_CLASS, NON_NEGATIVE_COLOR)
    };
    format!(
        "<span class=\"{}\" style=\"color:{}\">{}</span>",
        class, color, text
    )
}

/// Remove markup tags and decode the entities number displays commonly use.
pub fn strip_tags(markup: &str) -> String {
    TAG_REGEX
        .replace_all(markup, "")
        .replace("&nbsp;", " ")
        .replace("&minus;", "-")
        .replace("&#8722;", "-")
        .replace("&amp;", "&")
}

/// Recover the numeric value from a display string.
///
/// Tags are stripped first, then the configured thousands separator. When
/// the configured decimal separator appears once as the last separator it is
/// the decimal point and any other `,`/`.` is grouping. Text written in some
/// other convention falls back to guessing: when both `,` and `.` appear the
/// later one is decimal, and a lone separator followed by exactly three
/// digits is read as grouping. Scientific notation is accepted. Anything
/// unparsable yields positive infinity so it sorts last ascending.
///
/// ```
/// use df2tables::config::Separators;
/// use df2tables::model::parse_display_number;
///
/// assert_eq!(parse_display_number("1.234", Separators::CANONICAL), 1.234);
/// let european = Separators { thousands: Some('.'), decimal: ',' };
/// assert_eq!(parse_display_number("1.234,5", european), 1234.5);
/// ```
pub fn parse_display_number(markup: &str, separators: Separators) -> f64 {
    let text: String = strip_tags(markup)
        .chars()
        .filter(|&c| {
            !c.is_whitespace()
                && !matches!(c, '\'' | '\u{2009}' | '\u{202f}')
                && Some(c) != separators.thousands
        })
        .map(|c| if c == '\u{2212}' { '-' } else { c })
        .collect();

    if text.is_empty()
        || !text.chars().all(|c| {
            c.is_ascii_digit()
                || c == separators.decimal
                || matches!(c, ',' | '.' | '-' | '+' | 'e' | 'E')
        })
    {
        return f64::INFINITY;
    }

    let normalized = normalize_separators(&text, separators.decimal);
    match normalized.parse::<f64>() {
        Ok(n) if !n.is_nan() => n,
        _ => f64::INFINITY,
    }
}

/// Rewrite grouping/decimal separators into plain machine format.
fn normalize_separators(text: &str, decimal: char) -> String {
    let is_separator = |c: char| c == decimal || c == ',' || c == '.';
    let last = text.char_indices().rfind(|&(_, c)| is_separator(c));
    match last {
        None => text.to_string(),
        Some((pos, c)) if c == decimal && text.find(decimal) == Some(pos) => text
            .char_indices()
            .filter_map(|(i, ch)| {
                if i == pos {
                    Some('.')
                } else if is_separator(ch) {
                    None
                } else {
                    Some(ch)
                }
            })
            .collect(),
        Some(_) => guess_separators(text),
    }
}

/// Separator handling for text that does not follow the configured convention.
fn guess_separators(text: &str) -> String {
    let last_comma = text.rfind(',');
    let last_dot = text.rfind('.');
    match (last_comma, last_dot) {
        (Some(c), Some(d)) => {
            let (decimal, grouping) = if c > d { (',', '.') } else { ('.', ',') };
            text.chars()
                .filter(|&ch| ch != grouping)
                .map(|ch| if ch == decimal { '.' } else { ch })
                .collect()
        }
        (Some(_), None) => single_separator(text, ','),
        (None, Some(_)) => single_separator(text, '.'),
        (None, None) => text.to_string(),
    }
}

fn single_separator(text: &str, sep: char) -> String {
    if text.matches(sep).count() > 1 {
        return text.chars().filter(|&ch| ch != sep).collect();
    }
    let (before, after) = text.split_once(sep).unwrap_or((text, ""));
    let int_digits = before.trim_start_matches(['-', '+']);
    let looks_grouped = after.len() == 3
        && after.chars().all(|c| c.is_ascii_digit())
        && (1..=3).contains(&int_digits.len())
        && int_digits != "0";
    if looks_grouped {
        text.chars().filter(|&ch| ch != sep).collect()
    } else {
        text.replace(sep, ".")
    }
}

/// Order two display strings by their numeric values.
pub fn compare_display(a: &str, b: &str, separators: Separators) -> Ordering {
    parse_display_number(a, separators).total_cmp(&parse_display_number(b, separators))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUPED: Separators = Separators {
        thousands: Some(','),
        decimal: '.',
    };
    const EUROPEAN: Separators = Separators {
        thousands: Some('.'),
        decimal: ',',
    };

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.2345, 2), 1.23);
        assert_eq!(round_to(-0.001, 2), 0.0);
        assert!(round_to(-0.001, 2).is_sign_positive());
        assert_eq!(round_to(1e300, 15), 1e300);
    }

    #[test]
    fn test_format_number_canonical() {
        assert_eq!(format_number(1234.5, 2, Separators::CANONICAL), "1234.50");
        assert_eq!(format_number(3.0, 0, Separators::CANONICAL), "3");
        assert_eq!(format_number(-9.0, 1, Separators::CANONICAL), "-9.0");
        assert_eq!(format_number(f64::NAN, 2, Separators::CANONICAL), "NaN");
    }

    #[test]
    fn test_format_number_grouped() {
        assert_eq!(format_number(1234567.891, 2, GROUPED), "1,234,567.89");
        assert_eq!(format_number(-1234.5, 1, GROUPED), "-1,234.5");
        assert_eq!(format_number(999.0, 0, GROUPED), "999");
        assert_eq!(format_number(1234.5, 2, EUROPEAN), "1.234,50");
    }

    #[test]
    fn test_colored_markup_distinguishes_sign() {
        let neg = colored_markup(-1.5, 1, Separators::CANONICAL);
        let pos = colored_markup(2.0, 1, Separators::CANONICAL);
        let zero = colored_markup(0.0, 1, Separators::CANONICAL);

        assert!(neg.contains(NEGATIVE_CLASS));
        assert!(pos.contains(NON_NEGATIVE_CLASS));
        assert!(zero.contains(NON_NEGATIVE_CLASS));
        assert_ne!(neg.replace("-1.5", ""), pos.replace("2.0", ""));
        assert_eq!(
            neg,
            "<span class=\"num-neg\" style=\"color:#c0392b\">-1.5</span>"
        );
    }

    #[test]
    fn test_parse_display_number() {
        let canonical = Separators::CANONICAL;
        assert_eq!(parse_display_number("1,234.50", canonical), 1234.50);
        assert_eq!(parse_display_number("1.234,50", canonical), 1234.50);
        assert_eq!(parse_display_number("1,5", canonical), 1.5);
        assert_eq!(parse_display_number("1,234", canonical), 1234.0);
        assert_eq!(parse_display_number("0,125", canonical), 0.125);
        assert_eq!(parse_display_number("1.234.567", canonical), 1234567.0);
        assert_eq!(parse_display_number("-2.5e3", canonical), -2500.0);
        assert_eq!(parse_display_number("1E-2", canonical), 0.01);
        assert_eq!(parse_display_number("\u{2212}4", canonical), -4.0);
        assert_eq!(parse_display_number(" 12 ", canonical), 12.0);
    }

    #[test]
    fn test_parse_three_fraction_digits() {
        assert_eq!(parse_display_number("1.234", Separators::CANONICAL), 1.234);
        assert_eq!(parse_display_number("-999.999", Separators::CANONICAL), -999.999);
        assert_eq!(parse_display_number("1,234.567", GROUPED), 1234.567);
        assert_eq!(parse_display_number("1,234", GROUPED), 1234.0);
        assert_eq!(parse_display_number("1,234", EUROPEAN), 1.234);
        assert_eq!(parse_display_number("1.234,567", EUROPEAN), 1234.567);
    }

    #[test]
    fn test_parse_with_space_grouping() {
        let seps = Separators {
            thousands: Some('\u{202f}'),
            decimal: ',',
        };
        let markup = colored_markup(-1234567.125, 3, seps);
        assert_eq!(parse_display_number(&markup, seps), -1234567.125);
    }

    #[test]
    fn test_parse_strips_markup() {
        let markup = colored_markup(-1234.5, 2, GROUPED);
        assert_eq!(parse_display_number(&markup, GROUPED), -1234.5);
        assert_eq!(parse_display_number("<b>7</b>", Separators::CANONICAL), 7.0);
    }

    #[test]
    fn test_unparsable_is_infinite() {
        for text in ["", "n/a", "nan", "<span></span>", "--"] {
            assert_eq!(
                parse_display_number(text, Separators::CANONICAL),
                f64::INFINITY,
                "{:?}",
                text
            );
        }
    }

    fn sorted_by_display(values: &[f64], precision: u32, separators: Separators) -> Vec<f64> {
        let mut markup: Vec<String> = values
            .iter()
            .map(|&v| colored_markup(v, precision, separators))
            .collect();
        markup.push("<span>oops</span>".to_string());
        markup.sort_by(|a, b| compare_display(a, b, separators));
        markup
            .iter()
            .map(|m| parse_display_number(m, separators))
            .collect()
    }

    #[test]
    fn test_compare_display_recovers_numeric_order() {
        let values = [3.25, -1234.5, 0.0, -0.5, 1111.111, 42.0];
        assert_eq!(
            sorted_by_display(&values, 2, GROUPED),
            vec![-1234.5, -0.5, 0.0, 3.25, 42.0, 1111.11, f64::INFINITY]
        );
    }

    #[test]
    fn test_compare_display_at_precision_three() {
        let values = [1000.5, 999.999, 1.234, -2.5, 12345.678];
        let expected = vec![-2.5, 1.234, 999.999, 1000.5, 12345.678, f64::INFINITY];

        assert_eq!(sorted_by_display(&values, 3, Separators::CANONICAL), expected);
        assert_eq!(sorted_by_display(&values, 3, GROUPED), expected);
        assert_eq!(sorted_by_display(&values, 3, EUROPEAN), expected);
    }
}
