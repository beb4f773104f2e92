//! Command implementations for df2tables.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the option handling shared by every command that
//! builds a table.

mod inline;
mod open;
mod render;
mod sample;

use crate::cli::{Command, TableArgs};
use df2tables::config::RenderOptions;
use df2tables::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render::cmd_render(args),
        Command::Sample(args) => sample::cmd_sample(args),
        Command::Inline(args) => inline::cmd_inline(args),
    }
}

/// Build render options from an optional YAML file plus flag overrides.
///
/// Flags win over the file; the result is validated before use.
fn table_options(args: &TableArgs) -> Result<RenderOptions> {
    let mut options = match &args.config {
        Some(path) => RenderOptions::load(path)?,
        None => RenderOptions::default(),
    };

    if let Some(precision) = args.precision {
        options.precision = precision;
    }
    if !args.num_html.is_empty() {
        options.html_columns = args.num_html.clone();
    }
    if let Some(threshold) = args.dropdown_threshold {
        options.dropdown_threshold = threshold;
    }
    if args.locale {
        options.locale_formatting = true;
    }
    if args.no_column_control {
        options.load_column_control = false;
    }
    if args.no_parse_dates {
        options.parse_dates = false;
    }

    options.validate()?;
    Ok(options)
}
