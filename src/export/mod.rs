//! Chart image export
//!
//! Serializes the current chart to a PNG file, mirroring what the terminal
//! view shows: grouped income/expense bars over the twelve month slots.

pub mod png;

pub use png::{default_filename, export_chart_png, export_to_dir};
