//! Render configuration for df2tables.
//!
//! This module defines the [`RenderOptions`] struct passed explicitly into every
//! render call. It can be built in code or loaded from YAML; unknown fields are
//! ignored for forward compatibility and missing fields take their defaults.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::RenderOptions;
pub use types::Separators;
