//! df2tables: render tabular datasets as self-contained interactive HTML tables.
//!
//! The crate has two independent cores composed by [`render`]:
//!
//! - [`template`]: a marker-region engine that finds, extracts and replaces
//!   named regions in arbitrary text without parsing it.
//! - [`model`]: classifies dataset columns, serializes cells, and derives the
//!   UI hints the table widget needs.
//!
//! ```
//! use df2tables::config::RenderOptions;
//! use df2tables::dataset::{Dataset, RawValue};
//!
//! let dataset = Dataset::from_columns([
//!     ("city", vec![RawValue::from("Oslo"), RawValue::from("Lima")]),
//!     ("delta", vec![RawValue::from(-1.5), RawValue::from(2.25)]),
//! ])
//! .unwrap();
//! let options = RenderOptions::default().with_html_columns(["delta"]);
//!
//! let html = df2tables::render::render(&dataset, &options).unwrap();
//! assert!(html.contains("render_num"));
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod model;
pub mod render;
pub mod template;

pub use config::RenderOptions;
pub use dataset::Dataset;
pub use error::{Df2TablesError, Result};
pub use render::{head_fragment, render, render_inline, render_to_file, render_with_template};
