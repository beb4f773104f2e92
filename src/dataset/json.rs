//! JSON loaders for [`Dataset`].
//!
//! Two shapes are accepted:
//!
//! - **records**: `[{"a": 1, "b": "x"}, {"a": 2, "b": "y"}]`; columns follow
//!   first-seen key order and missing keys become nulls
//! - **split**: `{"columns": ["a", "b"], "data": [[1, "x"], [2, "y"]]}`

use super::{Dataset, RawValue};
use crate::error::{Df2TablesError, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Recognized JSON layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    /// Array of row objects.
    Records,
    /// Object with `columns` and row-major `data`.
    Split,
}

impl JsonShape {
    /// Detect the layout of a parsed JSON document.
    pub fn detect(value: &Value) -> Option<JsonShape> {
        match value {
            Value::Array(_) => Some(JsonShape::Records),
            Value::Object(map) if map.contains_key("columns") && map.contains_key("data") => {
                Some(JsonShape::Split)
            }
            _ => None,
        }
    }
}

impl Dataset {
    /// Read and parse a JSON dataset file.
    pub fn load<P: AsRef<Path>>(path: P, parse_dates: bool) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Df2TablesError::UserError(format!(
                "failed to read dataset file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content, parse_dates)
    }

    /// Parse a JSON dataset, detecting its shape.
    pub fn from_json_str(text: &str, parse_dates: bool) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Df2TablesError::Dataset(format!("failed to parse JSON: {}", e)))?;
        Self::from_json_value(value, parse_dates)
    }

    /// Build a dataset from an already parsed JSON document.
    pub fn from_json_value(value: Value, parse_dates: bool) -> Result<Self> {
        match (JsonShape::detect(&value), value) {
            (Some(JsonShape::Records), Value::Array(rows)) => {
                Self::from_json_records(rows, parse_dates)
            }
            (Some(JsonShape::Split), Value::Object(map)) => Self::from_json_split(map, parse_dates),
            _ => Err(Df2TablesError::Dataset(
                "expected an array of records or an object with 'columns' and 'data'".to_string(),
            )),
        }
    }

    /// Build a dataset from row objects.
    pub fn from_json_records(rows: Vec<Value>, parse_dates: bool) -> Result<Self> {
        let mut names: Vec<String> = Vec::new();
        let mut objects: Vec<Map<String, Value>> = Vec::with_capacity(rows.len());
        for (idx, row) in rows.into_iter().enumerate() {
            let Value::Object(obj) = row else {
                return Err(Df2TablesError::Dataset(format!(
                    "record {} is not a JSON object",
                    idx
                )));
            };
            for key in obj.keys() {
                if !names.contains(key) {
                    names.push(key.clone());
                }
            }
            objects.push(obj);
        }

        let mut columns: Vec<Vec<RawValue>> = vec![Vec::with_capacity(objects.len()); names.len()];
        for mut obj in objects {
            for (name, column) in names.iter().zip(columns.iter_mut()) {
                let value = obj.remove(name).unwrap_or(Value::Null);
                column.push(RawValue::from_json(value, parse_dates));
            }
        }

        Dataset::from_columns(names.into_iter().zip(columns))
    }

    /// Build a dataset from the `columns` + `data` layout.
    pub fn from_json_split(mut map: Map<String, Value>, parse_dates: bool) -> Result<Self> {
        let names: Vec<String> = match map.remove("columns") {
            Some(Value::Array(cols)) => cols
                .into_iter()
                .map(|c| match c {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
            _ => {
                return Err(Df2TablesError::Dataset(
                    "'columns' must be an array".to_string(),
                ));
            }
        };
        let Some(Value::Array(data)) = map.remove("data") else {
            return Err(Df2TablesError::Dataset("'data' must be an array".to_string()));
        };

        let mut columns: Vec<Vec<RawValue>> = vec![Vec::with_capacity(data.len()); names.len()];
        for (idx, row) in data.into_iter().enumerate() {
            let Value::Array(cells) = row else {
                return Err(Df2TablesError::Dataset(format!("row {} is not an array", idx)));
            };
            if cells.len() != names.len() {
                return Err(Df2TablesError::Dataset(format!(
                    "row {} has {} cells, expected {}",
                    idx,
                    cells.len(),
                    names.len()
                )));
            }
            for (cell, column) in cells.into_iter().zip(columns.iter_mut()) {
                column.push(RawValue::from_json(cell, parse_dates));
            }
        }

        Dataset::from_columns(names.into_iter().zip(columns))
    }
}
