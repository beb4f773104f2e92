//! Tests for render options.

use crate::config::{RenderOptions, Separators};
use crate::error::Df2TablesError;
use serde_json::json;

#[test]
fn test_default_options() {
    let options = RenderOptions::default();

    assert_eq!(options.title, "DataFrame");
    assert_eq!(options.table_id, "pd_datatab");
    assert_eq!(options.table_class, "display compact hover order-column");
    assert!(options.load_column_control);
    assert!(options.display_logo);
    assert!(options.js_opts.is_none());
    assert_eq!(options.precision, 2);
    assert!(options.html_columns.is_empty());
    assert_eq!(options.dropdown_threshold, 8);
    assert!(!options.locale_formatting);
    assert!(options.parse_dates);
    assert!(options.validate().is_ok());
}

#[test]
fn test_parse_empty_yaml() {
    let options = RenderOptions::from_yaml("").unwrap();
    assert_eq!(options, RenderOptions::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
title: Quarterly results
precision: 1
html_columns: [score, delta]
"#;
    let options = RenderOptions::from_yaml(yaml).unwrap();

    assert_eq!(options.title, "Quarterly results");
    assert_eq!(options.precision, 1);
    assert_eq!(options.html_columns, vec!["score", "delta"]);

    // Unspecified values should use defaults
    assert_eq!(options.dropdown_threshold, 8);
    assert!(options.load_column_control);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
title: Sales
table_id: sales_table
table_class: display
load_column_control: false
display_logo: false
js_opts:
  pageLength: 50
  scrollX: true
precision: 3
html_columns: [revenue]
dropdown_threshold: 5
locale_formatting: true
thousands_separator: "."
decimal_separator: ","
parse_dates: false
"#;
    let options = RenderOptions::from_yaml(yaml).unwrap();

    assert_eq!(options.title, "Sales");
    assert_eq!(options.table_id, "sales_table");
    assert_eq!(options.table_class, "display");
    assert!(!options.load_column_control);
    assert!(!options.display_logo);
    assert_eq!(
        options.js_opts,
        Some(json!({"pageLength": 50, "scrollX": true}))
    );
    assert_eq!(options.precision, 3);
    assert_eq!(options.html_columns, vec!["revenue"]);
    assert_eq!(options.dropdown_threshold, 5);
    assert!(options.locale_formatting);
    assert_eq!(options.thousands_separator, '.');
    assert_eq!(options.decimal_separator, ',');
    assert!(!options.parse_dates);
}

#[test]
fn test_unknown_fields_ignored() {
    let options = RenderOptions::from_yaml("future_option: 1\nprecision: 4").unwrap();
    assert_eq!(options.precision, 4);
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = RenderOptions::from_yaml("precision: [not, a, number]").unwrap_err();
    assert!(matches!(err, Df2TablesError::Config(_)));
}

#[test]
fn test_validate_precision_bound() {
    let err = RenderOptions::default().with_precision(16).validate().unwrap_err();
    assert!(err.to_string().contains("precision"));
    assert!(RenderOptions::default().with_precision(15).validate().is_ok());
}

#[test]
fn test_validate_threshold_positive() {
    let err = RenderOptions::default()
        .with_dropdown_threshold(0)
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("dropdown_threshold"));
}

#[test]
fn test_validate_separators() {
    let options = RenderOptions {
        thousands_separator: '.',
        decimal_separator: '.',
        ..RenderOptions::default()
    };
    assert!(options.validate().unwrap_err().to_string().contains("must differ"));

    let options = RenderOptions {
        decimal_separator: '5',
        ..RenderOptions::default()
    };
    assert!(options.validate().is_err());

    let options = RenderOptions {
        thousands_separator: 'e',
        ..RenderOptions::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validate_rejects_unparsable_separators() {
    let options =
        RenderOptions::from_yaml("locale_formatting: true\nthousands_separator: \"_\"").unwrap();
    let err = options.validate().unwrap_err();
    assert!(err.to_string().contains("thousands_separator"));

    let options = RenderOptions {
        decimal_separator: ';',
        ..RenderOptions::default()
    };
    assert!(options.validate().unwrap_err().to_string().contains("decimal_separator"));
}

#[test]
fn test_accepted_separators_parse_back() {
    for thousands in [',', '.', '\'', ' ', '\u{2009}', '\u{202f}'] {
        let decimal = if thousands == ',' { '.' } else { ',' };
        let options = RenderOptions {
            locale_formatting: true,
            thousands_separator: thousands,
            decimal_separator: decimal,
            ..RenderOptions::default()
        };
        options.validate().unwrap();

        let seps = options.separators();
        let text = crate::model::format_number(-1234567.5, 2, seps);
        assert_eq!(
            crate::model::parse_display_number(&text, seps),
            -1234567.5,
            "{:?}",
            text
        );
    }
}

#[test]
fn test_validate_table_id() {
    let options = RenderOptions {
        table_id: "my table".to_string(),
        ..RenderOptions::default()
    };
    assert!(options.validate().unwrap_err().to_string().contains("table_id"));

    let options = RenderOptions {
        table_id: String::new(),
        ..RenderOptions::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validate_js_opts_must_be_object() {
    let options = RenderOptions {
        js_opts: Some(json!([1, 2])),
        ..RenderOptions::default()
    };
    assert!(options.validate().unwrap_err().to_string().contains("js_opts"));
}

#[test]
fn test_separators_follow_locale_flag() {
    let options = RenderOptions::default();
    assert_eq!(options.separators(), Separators::CANONICAL);

    let options = RenderOptions::default().with_locale_formatting(true);
    assert_eq!(
        options.separators(),
        Separators {
            thousands: Some(','),
            decimal: '.'
        }
    );
}

#[test]
fn test_yaml_round_trip() {
    let options = RenderOptions::default()
        .with_title("T")
        .with_html_columns(["a"]);
    let yaml = options.to_yaml().unwrap();
    assert_eq!(RenderOptions::from_yaml(&yaml).unwrap(), options);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("options.yaml");
    std::fs::write(&path, "precision: 0\n").unwrap();

    let options = RenderOptions::load(&path).unwrap();
    assert_eq!(options.precision, 0);

    let err = RenderOptions::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, Df2TablesError::UserError(_)));
}
