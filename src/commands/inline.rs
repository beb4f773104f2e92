//! Implementation of the `df2tables inline` command.

use super::table_options;
use crate::cli::InlineArgs;
use df2tables::dataset::Dataset;
use df2tables::error::Result;
use df2tables::render::{head_fragment, render_inline};

/// Print an embeddable table fragment to stdout.
pub fn cmd_inline(args: InlineArgs) -> Result<()> {
    let options = table_options(&args.table)?;
    let dataset = Dataset::load(&args.input, options.parse_dates)?;

    let attrs: Vec<(&str, &str)> = args
        .table_id
        .as_deref()
        .map(|id| vec![("id", id)])
        .unwrap_or_default();
    let fragment = render_inline(&dataset, &options, &attrs)?;

    if args.head {
        println!("{}", head_fragment()?);
    }
    println!("{}", fragment);
    Ok(())
}
