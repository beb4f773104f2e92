//! Implementation of the `df2tables render` command.

use super::open::open_file;
use super::table_options;
use crate::cli::RenderArgs;
use df2tables::dataset::Dataset;
use df2tables::error::{Df2TablesError, Result};
use df2tables::fs::atomic_write_file;
use df2tables::render::{BUNDLED_TEMPLATE, render_with_template};
use std::fs;

/// Render a JSON dataset to an HTML page.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut options = table_options(&args.table)?;
    if let Some(title) = args.title {
        options.title = title;
    }
    if args.no_logo {
        options.display_logo = false;
    }

    let template = match &args.template {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Df2TablesError::UserError(format!(
                "failed to read template '{}': {}",
                path.display(),
                e
            ))
        })?,
        None => BUNDLED_TEMPLATE.to_string(),
    };

    let dataset = Dataset::load(&args.input, options.parse_dates)?;
    let html = render_with_template(&dataset, &options, &template)?;
    atomic_write_file(&args.output, &html)?;

    eprintln!(
        "Rendered {} rows x {} columns to {}",
        dataset.n_rows(),
        dataset.n_cols(),
        args.output.display()
    );

    if args.open {
        open_file(&args.output);
    }
    Ok(())
}
