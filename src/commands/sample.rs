//! Implementation of the `df2tables sample` command.

use super::open::open_file;
use crate::cli::SampleArgs;
use df2tables::config::RenderOptions;
use df2tables::dataset::Dataset;
use df2tables::error::Result;
use df2tables::render::render_to_file;

/// Columns of the sample dataset shown as colored numbers.
const SAMPLE_NUMERIC_COLUMNS: &[&str] = &["revenue", "measurement", "value"];

/// Render the built-in sample dataset.
pub fn cmd_sample(args: SampleArgs) -> Result<()> {
    let dataset = Dataset::sample(args.size, args.seed)?;
    let options = sample_options(args.precision)?;

    render_to_file(&dataset, &options, &args.output)?;
    eprintln!("Created sample table at {}", args.output.display());

    if args.open {
        open_file(&args.output);
    }
    Ok(())
}

fn sample_options(precision: u32) -> Result<RenderOptions> {
    let options = RenderOptions::default()
        .with_title("Example DataFrame")
        .with_html_columns(SAMPLE_NUMERIC_COLUMNS.iter().copied())
        .with_precision(precision);
    options.validate()?;
    Ok(options)
}
