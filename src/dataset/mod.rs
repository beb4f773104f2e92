//! Tabular dataset abstraction.
//!
//! A [`Dataset`] is an ordered list of named columns, each an ordered list of
//! [`RawValue`]s, all of the same length. It is the only input the table model
//! builder needs and is never mutated while a render is in progress.

mod json;
mod sample;
mod value;

pub use json::JsonShape;
pub use value::{RawValue, Temporal};

use crate::error::{Df2TablesError, Result};

/// One named column of raw values.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceColumn {
    /// Field name as it appears in the source.
    pub name: String,
    /// Cell values, one per row.
    pub values: Vec<RawValue>,
}

/// An in-memory table: ordered named columns with a uniform row count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<SourceColumn>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(name, values)` pairs.
    ///
    /// Fails when names repeat or columns differ in length.
    pub fn from_columns<I, N>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, Vec<RawValue>)>,
        N: Into<String>,
    {
        let mut dataset = Dataset::new();
        for (name, values) in columns {
            dataset.push_column(name, values)?;
        }
        Ok(dataset)
    }

    /// Append a column.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<RawValue>) -> Result<()> {
        let name = name.into();
        if self.columns.iter().any(|c| c.name == name) {
            return Err(Df2TablesError::Dataset(format!(
                "duplicate column name '{}'",
                name
            )));
        }
        if let Some(first) = self.columns.first()
            && first.values.len() != values.len()
        {
            return Err(Df2TablesError::Dataset(format!(
                "column '{}' has {} values, expected {}",
                name,
                values.len(),
                first.values.len()
            )));
        }
        self.columns.push(SourceColumn { name, values });
        Ok(())
    }

    /// Columns in source order.
    pub fn columns(&self) -> &[SourceColumn] {
        &self.columns
    }

    /// Column names in source order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// True when the dataset has no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.n_cols() == 0 || self.n_rows() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns() {
        let ds = Dataset::from_columns([
            ("a", vec![RawValue::from(1), RawValue::from(2)]),
            ("b", vec![RawValue::from("x"), RawValue::Null]),
        ])
        .unwrap();
        assert_eq!(ds.n_rows(), 2);
        assert_eq!(ds.n_cols(), 2);
        assert_eq!(ds.column_names(), vec!["a", "b"]);
        assert!(!ds.is_empty());
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let err = Dataset::from_columns([
            ("a", vec![RawValue::from(1), RawValue::from(2)]),
            ("b", vec![RawValue::from("x")]),
        ])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid dataset: column 'b' has 1 values, expected 2"
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Dataset::from_columns([
            ("a", vec![RawValue::from(1)]),
            ("a", vec![RawValue::from(2)]),
        ])
        .unwrap_err();
        assert!(matches!(err, Df2TablesError::Dataset(_)));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::new();
        assert_eq!(ds.n_rows(), 0);
        assert!(ds.is_empty());

        let ds = Dataset::from_columns([("a", Vec::new())]).unwrap();
        assert_eq!(ds.n_cols(), 1);
        assert!(ds.is_empty());
    }
}
