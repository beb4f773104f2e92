//! Configuration types and defaults for df2tables.
//!
//! This module defines helper types, constants, and default value functions
//! used by the RenderOptions struct.

/// Width, in characters, above which underscored titles get spaces instead.
pub const TITLE_WRAP_THRESHOLD: usize = 20;

/// Separator characters used for display formatting of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// Digit-group separator; `None` disables grouping.
    pub thousands: Option<char>,
    /// Decimal separator.
    pub decimal: char,
}

impl Separators {
    /// Machine format: no grouping, dot decimal.
    pub const CANONICAL: Separators = Separators {
        thousands: None,
        decimal: '.',
    };
}

impl Default for Separators {
    fn default() -> Self {
        Separators::CANONICAL
    }
}

// Default value functions for serde
pub(crate) fn default_title() -> String {
    "DataFrame".to_string()
}
pub(crate) fn default_precision() -> u32 {
    2
}
pub(crate) fn default_dropdown_threshold() -> usize {
    8
}
pub(crate) fn default_thousands_separator() -> char {
    ','
}
pub(crate) fn default_decimal_separator() -> char {
    '.'
}
pub(crate) fn default_table_id() -> String {
    "pd_datatab".to_string()
}
pub(crate) fn default_table_class() -> String {
    "display compact hover order-column".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
