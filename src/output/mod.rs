//! Output module for writing collected quotes
//!
//! This module handles:
//! - Rendering a tag list as a single text field
//! - Writing the CSV file with its fixed header

mod csv_writer;
mod tags;

pub use csv_writer::{write_quotes, write_quotes_csv};
pub use tags::format_tags;
