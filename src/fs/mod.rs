//! Filesystem utilities.
//!
//! Rendered documents are handed off through atomic writes so a failed render
//! never leaves a half-written file.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
