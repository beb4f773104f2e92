//! Column classification: value kind, title normalization, distinct counts.

use super::types::{CellValue, ValueKind};
use crate::config::types::TITLE_WRAP_THRESHOLD;
use crate::dataset::RawValue;
use std::collections::HashSet;

/// Infer a column's kind from the runtime types of its non-missing values.
///
/// All-missing and empty columns are textual.
pub fn infer_kind(values: &[RawValue]) -> ValueKind {
    let mut present = values.iter().filter(|v| !v.is_missing()).peekable();
    if present.peek().is_none() {
        return ValueKind::Textual;
    }

    let mut all_numeric = true;
    let mut all_temporal = true;
    for value in present {
        all_numeric &= matches!(value, RawValue::Number(_));
        all_temporal &= matches!(value, RawValue::Temporal(_));
        if !all_numeric && !all_temporal {
            return ValueKind::Textual;
        }
    }

    if all_numeric {
        ValueKind::Numeric
    } else {
        ValueKind::Temporal
    }
}

/// Make long underscored titles wrappable.
///
/// Titles longer than the wrap threshold that contain an underscore get every
/// underscore replaced with a space; all other titles are returned unchanged.
pub fn normalize_title(name: &str) -> String {
    if name.chars().count() > TITLE_WRAP_THRESHOLD && name.contains('_') {
        name.replace('_', " ")
    } else {
        name.to_string()
    }
}

/// Count distinct serialized values; every null counts as the same value.
pub fn count_distinct(cells: &[CellValue]) -> usize {
    cells
        .iter()
        .map(CellValue::distinct_key)
        .collect::<HashSet<_>>()
        .len()
}
