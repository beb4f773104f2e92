//! Table model builder.
//!
//! Turns a [`Dataset`](crate::dataset::Dataset) into a [`TableModel`]: ordered
//! column metadata, a row-major matrix of serialized cells, and the UI hints
//! the rendering component needs.
//!
//! # Classification
//!
//! - A column whose non-missing values are all numbers is numeric; all
//!   date/times, temporal; anything else (including empty) textual.
//! - Titles longer than 20 characters with underscores get spaces instead.
//! - A column with at most `dropdown_threshold` distinct serialized values
//!   (nulls counting as one) is a categorical candidate, unless it is an HTML
//!   column. Temporal columns can be categorical; their cells are still
//!   formatted as dates.
//! - HTML columns sort numerically. Numeric ones render as colored numbers
//!   (orderable, not searchable); others pass markup through (searchable on
//!   their text, not orderable).
//!
//! # Serialization
//!
//! - numbers are rounded to `precision` and stay numbers in numeric columns
//! - dates become ISO-8601 text
//! - null, NaN and infinities become JSON `null`
//! - text is trimmed and HTML-escaped unless the column passes HTML through
//! - anything else is stringified structurally and escaped, never an error

mod builder;
mod classify;
mod numeric;
mod serialize;
mod types;


pub use builder::build_table_model;
pub use classify::{count_distinct, infer_kind, normalize_title};
pub use numeric::{
    NEGATIVE_CLASS, NON_NEGATIVE_CLASS, colored_markup, compare_display, format_number,
    parse_display_number, round_to, strip_tags,
};
pub use serialize::escape_html;
pub use types::{CellValue, Column, ColumnKind, RenderHint, TableModel, UiHints, ValueKind};
