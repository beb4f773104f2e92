//! RenderOptions loading, validation, and utility operations.

use super::model::RenderOptions;
use super::types::Separators;
use crate::error::{Df2TablesError, Result};
use std::path::Path;

/// Upper bound on fractional digits; beyond this f64 display is noise.
const MAX_PRECISION: u32 = 15;

/// Grouping characters the display-number parser understands.
const THOUSANDS_SEPARATORS: &[char] = &[',', '.', '\'', ' ', '\u{2009}', '\u{202f}'];
/// Decimal characters the display-number parser understands.
const DECIMAL_SEPARATORS: &[char] = &[',', '.'];

impl RenderOptions {
    /// Load options from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(RenderOptions)` - Successfully loaded and validated options
    /// * `Err(Df2TablesError::UserError)` - The file could not be read
    /// * `Err(Df2TablesError::Config)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            Df2TablesError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse options from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(RenderOptions::default());
        }

        let options: RenderOptions = serde_yaml::from_str(yaml)
            .map_err(|e| Df2TablesError::Config(format!("failed to parse YAML: {}", e)))?;

        options.validate()?;
        Ok(options)
    }

    /// Serialize options to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Df2TablesError::Config(format!("failed to serialize to YAML: {}", e)))
    }

    /// Validate option values.
    ///
    /// Validation rules:
    /// - `precision` must be at most 15
    /// - `dropdown_threshold` must be positive
    /// - `thousands_separator` must be `,` `.` `'` or a space character, and
    ///   `decimal_separator` must be `,` or `.`; the two must differ
    /// - `table_id` must be non-empty without whitespace or quotes
    /// - `js_opts`, when set, must be a JSON object
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(Df2TablesError::Config(format!(
                "precision must be at most {} (got {})",
                MAX_PRECISION, self.precision
            )));
        }

        if self.dropdown_threshold == 0 {
            return Err(Df2TablesError::Config(
                "dropdown_threshold must be greater than 0".to_string(),
            ));
        }

        if !THOUSANDS_SEPARATORS.contains(&self.thousands_separator) {
            return Err(Df2TablesError::Config(format!(
                "thousands_separator must be one of ',', '.', apostrophe, space, thin space or \
                 narrow no-break space (found {:?})",
                self.thousands_separator
            )));
        }
        if !DECIMAL_SEPARATORS.contains(&self.decimal_separator) {
            return Err(Df2TablesError::Config(format!(
                "decimal_separator must be ',' or '.' (found {:?})",
                self.decimal_separator
            )));
        }
        if self.thousands_separator == self.decimal_separator {
            return Err(Df2TablesError::Config(format!(
                "thousands_separator and decimal_separator must differ (both '{}')",
                self.decimal_separator
            )));
        }

        if self.table_id.is_empty()
            || self
                .table_id
                .chars()
                .any(|c| c.is_whitespace() || c == '"' || c == '\'')
        {
            return Err(Df2TablesError::Config(format!(
                "table_id must be non-empty and contain no whitespace or quotes (found '{}')",
                self.table_id
            )));
        }

        if let Some(opts) = &self.js_opts
            && !opts.is_object()
        {
            return Err(Df2TablesError::Config(
                "js_opts must be a JSON object".to_string(),
            ));
        }

        Ok(())
    }

    /// Separators for display formatting under the current options.
    pub fn separators(&self) -> Separators {
        if self.locale_formatting {
            Separators {
                thousands: Some(self.thousands_separator),
                decimal: self.decimal_separator,
            }
        } else {
            Separators::CANONICAL
        }
    }
}
