//! Table model types.

use super::numeric::{colored_markup, format_number};
use crate::config::Separators;
use serde::{Serialize, Serializer};

/// Data kind inferred from the values of one source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Every non-missing value is a number.
    Numeric,
    /// Every non-missing value is a date/time.
    Temporal,
    /// Anything else, including all-missing and empty columns.
    Textual,
}

/// Role a column plays in the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Temporal,
    Textual,
    /// Few enough distinct values for a dropdown filter.
    CategoricalCandidate,
}

impl From<ValueKind> for ColumnKind {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Numeric => ColumnKind::Numeric,
            ValueKind::Temporal => ColumnKind::Temporal,
            ValueKind::Textual => ColumnKind::Textual,
        }
    }
}

/// How the rendering component should display a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderHint {
    /// Display the serialized value as is.
    Plain,
    /// Wrap the formatted number in a sign-dependent color.
    NumericColored,
    /// Insert the value as HTML without escaping.
    RawHtmlPassthrough,
}

/// Metadata for one output column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Display title after normalization.
    pub title: String,
    /// Field name in the source dataset.
    pub source_name: String,
    /// 0-based position, stable across the pipeline.
    pub role: usize,
    pub kind: ColumnKind,
    /// Kind inferred from the data, before categorical/HTML overrides.
    pub value_kind: ValueKind,
    pub searchable: bool,
    pub orderable: bool,
    pub render_hint: RenderHint,
    /// Fractional digits for numeric display, when the column holds numbers.
    pub precision: Option<u32>,
}

/// A serialized cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Finite number, already rounded to the display precision.
    Number(f64),
    /// HTML-escaped text.
    Text(String),
    /// Missing value; serializes to JSON `null`, never to the string `"null"`.
    Null,
    /// Markup passed through without escaping.
    Html(String),
}

impl CellValue {
    /// Key used for distinct-value counting; all nulls share one key.
    pub(crate) fn distinct_key(&self) -> String {
        match self {
            CellValue::Number(n) => format!("n:{}", n),
            CellValue::Text(s) | CellValue::Html(s) => format!("s:{}", s),
            CellValue::Null => "null".to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            CellValue::Number(_) | CellValue::Null => serializer.serialize_none(),
            CellValue::Text(s) | CellValue::Html(s) => serializer.serialize_str(s),
        }
    }
}

/// Derived UI hints, as column indices in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiHints {
    /// Columns that get a dropdown filter.
    pub categorical: Vec<usize>,
    /// Columns that accept free-text or dropdown search.
    pub searchable: Vec<usize>,
    /// Columns that can be sorted.
    pub orderable: Vec<usize>,
}

/// Columns, serialized rows, and UI hints for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub(crate) columns: Vec<Column>,
    pub(crate) rows: Vec<Vec<CellValue>>,
    pub(crate) hints: UiHints,
    pub(crate) separators: Separators,
}

impl TableModel {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Row-major cells; every row has `columns().len()` entries.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn hints(&self) -> &UiHints {
        &self.hints
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by display title or source name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.title == name || c.source_name == name)
    }

    /// Titles of searchable columns that do not hold numbers, in column order.
    pub fn searchable_titles(&self) -> Vec<&str> {
        self.hints
            .searchable
            .iter()
            .filter_map(|&i| self.columns.get(i))
            .filter(|c| c.value_kind != ValueKind::Numeric)
            .map(|c| c.title.as_str())
            .collect()
    }

    /// Display HTML for one cell, as the rendering component would show it.
    ///
    /// Returns `None` when the position is out of range.
    pub fn display_html(&self, row: usize, col: usize) -> Option<String> {
        let column = self.columns.get(col)?;
        let cell = self.rows.get(row)?.get(col)?;
        let precision = column.precision.unwrap_or(0);
        let html = match (column.render_hint, cell) {
            (_, CellValue::Null) => String::new(),
            (RenderHint::NumericColored, CellValue::Number(n)) => {
                colored_markup(*n, precision, self.separators)
            }
            (_, CellValue::Number(n)) => format_number(*n, precision, self.separators),
            (_, CellValue::Text(s)) | (_, CellValue::Html(s)) => s.clone(),
        };
        Some(html)
    }

    /// The row matrix as a JSON array literal.
    pub fn rows_json(&self) -> String {
        // CellValue serialization cannot fail; fall back to an empty matrix regardless
        serde_json::to_string(&self.rows).unwrap_or_else(|_| "[]".to_string())
    }
}
