//! Build a [`TableModel`] from a [`Dataset`].

use super::classify::{count_distinct, infer_kind, normalize_title};
use super::serialize::{CellContext, serialize_cell};
use super::types::{CellValue, Column, ColumnKind, RenderHint, TableModel, UiHints, ValueKind};
use crate::config::RenderOptions;
use crate::dataset::{Dataset, SourceColumn};
use crate::error::{Df2TablesError, Result};

/// Classify columns, serialize cells, and derive UI hints.
///
/// Fails with [`Df2TablesError::UnknownColumn`] before any cell is serialized
/// when `options.html_columns` names a column the dataset does not have.
/// Individual cells never fail; see the serialization rules in
/// [`crate::model`].
///
/// # Example
///
/// ```
/// use df2tables::config::RenderOptions;
/// use df2tables::dataset::{Dataset, RawValue};
/// use df2tables::model::{build_table_model, RenderHint};
///
/// let dataset = Dataset::from_columns([
///     ("name", vec![RawValue::from("ann"), RawValue::from("bob")]),
///     ("score", vec![RawValue::from(-1.25), RawValue::from(3.5)]),
/// ])
/// .unwrap();
/// let options = RenderOptions::default().with_html_columns(["score"]);
///
/// let model = build_table_model(&dataset, &options).unwrap();
/// assert_eq!(model.columns()[1].render_hint, RenderHint::NumericColored);
/// ```
pub fn build_table_model(dataset: &Dataset, options: &RenderOptions) -> Result<TableModel> {
    options.validate()?;
    check_html_columns(dataset, options)?;

    let separators = options.separators();
    let mut columns = Vec::with_capacity(dataset.n_cols());
    let mut cells_by_column: Vec<Vec<CellValue>> = Vec::with_capacity(dataset.n_cols());

    for (role, source) in dataset.columns().iter().enumerate() {
        let title = normalize_title(&source.name);
        let value_kind = infer_kind(&source.values);
        let is_html = is_html_column(options, source, &title);

        let render_hint = match (is_html, value_kind) {
            (false, _) => RenderHint::Plain,
            (true, ValueKind::Numeric) => RenderHint::NumericColored,
            (true, _) => RenderHint::RawHtmlPassthrough,
        };

        let ctx = CellContext {
            value_kind,
            render_hint,
            precision: options.precision,
            separators,
            locale_formatting: options.locale_formatting,
        };
        let cells: Vec<CellValue> = source
            .values
            .iter()
            .map(|v| serialize_cell(v, &ctx))
            .collect();

        let distinct = count_distinct(&cells);
        let kind = if render_hint != RenderHint::NumericColored
            && distinct <= options.dropdown_threshold
        {
            ColumnKind::CategoricalCandidate
        } else if is_html {
            ColumnKind::Numeric
        } else {
            ColumnKind::from(value_kind)
        };

        let (searchable, orderable) = match (render_hint, kind) {
            (RenderHint::NumericColored, _) => (false, true),
            (RenderHint::RawHtmlPassthrough, _) => (true, false),
            (_, ColumnKind::Numeric) => (false, true),
            _ => (true, true),
        };

        let precision = match value_kind {
            ValueKind::Numeric => Some(options.precision),
            _ => None,
        };

        tracing::trace!(
            column = %source.name,
            ?value_kind,
            ?kind,
            ?render_hint,
            distinct,
            "classified column"
        );

        columns.push(Column {
            title,
            source_name: source.name.clone(),
            role,
            kind,
            value_kind,
            searchable,
            orderable,
            render_hint,
            precision,
        });
        cells_by_column.push(cells);
    }

    let hints = derive_hints(&columns);
    let rows = transpose(cells_by_column, dataset.n_rows());

    Ok(TableModel {
        columns,
        rows,
        hints,
        separators,
    })
}

/// Fail fast on HTML column names that match nothing.
fn check_html_columns(dataset: &Dataset, options: &RenderOptions) -> Result<()> {
    for name in &options.html_columns {
        let known = dataset
            .columns()
            .iter()
            .any(|c| &c.name == name || &normalize_title(&c.name) == name);
        if !known {
            return Err(Df2TablesError::UnknownColumn {
                name: name.clone(),
                available: dataset
                    .column_names()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            });
        }
    }
    Ok(())
}

fn is_html_column(options: &RenderOptions, source: &SourceColumn, title: &str) -> bool {
    options
        .html_columns
        .iter()
        .any(|n| n == &source.name || n == title)
}

fn derive_hints(columns: &[Column]) -> UiHints {
    let indices = |pred: fn(&Column) -> bool| -> Vec<usize> {
        columns
            .iter()
            .filter(|c| pred(c))
            .map(|c| c.role)
            .collect()
    };
    UiHints {
        categorical: indices(|c| c.kind == ColumnKind::CategoricalCandidate),
        searchable: indices(|c| c.searchable),
        orderable: indices(|c| c.orderable),
    }
}

fn transpose(columns: Vec<Vec<CellValue>>, n_rows: usize) -> Vec<Vec<CellValue>> {
    let n_cols = columns.len();
    let mut rows: Vec<Vec<CellValue>> = (0..n_rows).map(|_| Vec::with_capacity(n_cols)).collect();
    for column in columns {
        for (row, cell) in rows.iter_mut().zip(column) {
            row.push(cell);
        }
    }
    rows
}
