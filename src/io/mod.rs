//! I/O module
//!
//! Handles document loading and summary output.
//!
//! # Components
//!
//! - `json_reader` - Loads input documents as untyped JSON
//! - `report` - Renders, prints and persists the sales summary

pub mod json_reader;
pub mod report;

pub use json_reader::{into_records, load_document, load_sequence};
pub use report::{
    format_currency, print_summary, render_summary, write_results, DEFAULT_RESULTS_FILE,
};
