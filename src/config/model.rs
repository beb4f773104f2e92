//! RenderOptions struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options recognized by the table model builder and page renderer.
///
/// Unknown fields in YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    // =========================================================================
    // Page settings
    // =========================================================================
    /// Page title (escaped before injection).
    #[serde(default = "default_title")]
    pub title: String,

    /// `id` attribute of the generated table element.
    #[serde(default = "default_table_id")]
    pub table_id: String,

    /// `class` attribute of the generated table element.
    #[serde(default = "default_table_class")]
    pub table_class: String,

    /// Whether to include the column control extension and its per-column menus.
    #[serde(default = "default_true")]
    pub load_column_control: bool,

    /// Whether to show the widget vendor logo in the footer.
    #[serde(default = "default_true")]
    pub display_logo: bool,

    /// Extra widget options merged into the table initialization (JSON object).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_opts: Option<Value>,

    // =========================================================================
    // Column settings
    // =========================================================================
    /// Fractional digits for numeric display.
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Columns rendered as HTML: colored numbers, or raw markup for text.
    #[serde(default)]
    pub html_columns: Vec<String>,

    /// Highest distinct-value count that still gets a dropdown filter.
    #[serde(default = "default_dropdown_threshold")]
    pub dropdown_threshold: usize,

    /// Use grouped, locale-style separators for numeric and temporal display.
    #[serde(default)]
    pub locale_formatting: bool,

    /// Digit-group separator used when `locale_formatting` is on.
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    /// Decimal separator used when `locale_formatting` is on.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    // =========================================================================
    // Input settings
    // =========================================================================
    /// Recognize ISO-style date/time strings in JSON input.
    #[serde(default = "default_true")]
    pub parse_dates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            table_id: default_table_id(),
            table_class: default_table_class(),
            load_column_control: default_true(),
            display_logo: default_true(),
            js_opts: None,
            precision: default_precision(),
            html_columns: Vec::new(),
            dropdown_threshold: default_dropdown_threshold(),
            locale_formatting: false,
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            parse_dates: default_true(),
        }
    }
}

impl RenderOptions {
    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the numeric display precision.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Set the columns rendered as HTML.
    pub fn with_html_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.html_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the dropdown filter threshold.
    pub fn with_dropdown_threshold(mut self, threshold: usize) -> Self {
        self.dropdown_threshold = threshold;
        self
    }

    /// Enable or disable locale-style separators.
    pub fn with_locale_formatting(mut self, enabled: bool) -> Self {
        self.locale_formatting = enabled;
        self
    }
}
