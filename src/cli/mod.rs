//! CLI argument parsing for df2tables.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// df2tables: render tabular datasets as interactive HTML tables.
///
/// Input datasets are JSON files in either records shape (an array of
/// objects) or split shape (`{"columns": [...], "data": [[...]]}`).
#[derive(Parser, Debug)]
#[command(name = "df2tables")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for df2tables.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a JSON dataset as a standalone HTML page.
    Render(RenderArgs),

    /// Render the built-in sample dataset.
    ///
    /// Useful for trying out the table widget and the numeric coloring.
    Sample(SampleArgs),

    /// Print an embeddable table fragment for a JSON dataset.
    ///
    /// The host page must load the widget once; see `--head`.
    Inline(InlineArgs),
}

/// Options shared by every command that builds a table.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// YAML file with render options; flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fractional digits for numeric display.
    #[arg(long)]
    pub precision: Option<u32>,

    /// Columns rendered as HTML (colored numbers or raw markup).
    #[arg(long = "num-html", value_delimiter = ',')]
    pub num_html: Vec<String>,

    /// Highest distinct-value count that still gets a dropdown filter.
    #[arg(long)]
    pub dropdown_threshold: Option<usize>,

    /// Group digits and use the configured separators for display.
    #[arg(long)]
    pub locale: bool,

    /// Do not load the column control extension.
    #[arg(long)]
    pub no_column_control: bool,

    /// Keep date-like strings in the input as plain text.
    #[arg(long)]
    pub no_parse_dates: bool,
}

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input dataset (JSON).
    pub input: PathBuf,

    /// Output HTML file.
    #[arg(short, long, default_value = "datatable.html")]
    pub output: PathBuf,

    /// Page title.
    #[arg(long)]
    pub title: Option<String>,

    /// Hide the widget logo.
    #[arg(long)]
    pub no_logo: bool,

    /// Custom page template to render into.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Open the result in the default browser.
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Arguments for the `sample` command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Output HTML file.
    #[arg(short, long, default_value = "df_table.html")]
    pub output: PathBuf,

    /// Number of rows to generate.
    #[arg(long, default_value_t = 20)]
    pub size: usize,

    /// Seed for the generated values.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Decimal places shown for numeric columns.
    #[arg(long, default_value_t = 3)]
    pub precision: u32,

    /// Open the result in the default browser.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the `inline` command.
#[derive(Args, Debug)]
pub struct InlineArgs {
    /// Input dataset (JSON).
    pub input: PathBuf,

    /// `id` of the generated table element.
    #[arg(long)]
    pub table_id: Option<String>,

    /// Print the widget head fragment before the table.
    #[arg(long)]
    pub head: bool,

    #[command(flatten)]
    pub table: TableArgs,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_render_minimal() {
        let cli = Cli::try_parse_from(["df2tables", "render", "data.json"]).unwrap();
        if let Command::Render(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("data.json"));
            assert_eq!(args.output, PathBuf::from("datatable.html"));
            assert!(args.title.is_none());
            assert!(args.table.num_html.is_empty());
            assert!(!args.open);
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn parse_render_full() {
        let cli = Cli::try_parse_from([
            "df2tables",
            "render",
            "data.json",
            "-o",
            "out/table.html",
            "--title",
            "Sales",
            "--precision",
            "1",
            "--num-html",
            "revenue,delta",
            "--dropdown-threshold",
            "5",
            "--locale",
            "--no-column-control",
            "--no-logo",
            "--open",
        ])
        .unwrap();
        if let Command::Render(args) = cli.command {
            assert_eq!(args.output, PathBuf::from("out/table.html"));
            assert_eq!(args.title.as_deref(), Some("Sales"));
            assert_eq!(args.table.precision, Some(1));
            assert_eq!(args.table.num_html, vec!["revenue", "delta"]);
            assert_eq!(args.table.dropdown_threshold, Some(5));
            assert!(args.table.locale);
            assert!(args.table.no_column_control);
            assert!(args.no_logo);
            assert!(args.open);
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn parse_sample_defaults() {
        let cli = Cli::try_parse_from(["df2tables", "sample"]).unwrap();
        if let Command::Sample(args) = cli.command {
            assert_eq!(args.output, PathBuf::from("df_table.html"));
            assert_eq!(args.size, 20);
            assert_eq!(args.seed, 42);
            assert_eq!(args.precision, 3);
        } else {
            panic!("Expected Sample command");
        }
    }

    #[test]
    fn parse_sample_with_precision() {
        let cli =
            Cli::try_parse_from(["df2tables", "sample", "--precision", "1", "--size", "5"]).unwrap();
        if let Command::Sample(args) = cli.command {
            assert_eq!(args.precision, 1);
            assert_eq!(args.size, 5);
        } else {
            panic!("Expected Sample command");
        }
    }

    #[test]
    fn parse_inline_with_table_id() {
        let cli =
            Cli::try_parse_from(["df2tables", "inline", "d.json", "--table-id", "t2", "--head"])
                .unwrap();
        if let Command::Inline(args) = cli.command {
            assert_eq!(args.table_id.as_deref(), Some("t2"));
            assert!(args.head);
        } else {
            panic!("Expected Inline command");
        }
    }

    #[test]
    fn parse_global_verbose() {
        let cli = Cli::try_parse_from(["df2tables", "sample", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn render_requires_input() {
        assert!(Cli::try_parse_from(["df2tables", "render"]).is_err());
    }
}
