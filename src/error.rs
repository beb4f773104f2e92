//! Error types for df2tables.
//!
//! Uses thiserror for derive macros. Template engine failures keep their own
//! type ([`TemplateError`]) and are wrapped transparently so the offending
//! region name reaches the caller unchanged.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for df2tables operations.
#[derive(Error, Debug)]
pub enum Df2TablesError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// A marker region could not be located or is malformed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A configured column name does not match any dataset column.
    #[error("unknown column '{name}' (available columns: {})", available.join(", "))]
    UnknownColumn {
        /// The name that failed to match.
        name: String,
        /// Column titles present in the dataset.
        available: Vec<String>,
    },

    /// The input dataset is ill-shaped (ragged rows, duplicate names, bad JSON).
    #[error("invalid dataset: {0}")]
    Dataset(String),

    /// Render options failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Writing or reading a file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl Df2TablesError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Df2TablesError::UserError(_) => exit_codes::USER_ERROR,
            Df2TablesError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            Df2TablesError::UnknownColumn { .. } => exit_codes::CONFIG_FAILURE,
            Df2TablesError::Dataset(_) => exit_codes::CONFIG_FAILURE,
            Df2TablesError::Config(_) => exit_codes::CONFIG_FAILURE,
            Df2TablesError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for df2tables operations.
pub type Result<T> = std::result::Result<T, Df2TablesError>;
