//! CSV output of collected quotes
//!
//! One header row, then one row per quote. Fields are quoted only when they
//! contain the delimiter, a quote, or a line break, and rows end in CRLF.

use crate::output::tags::format_tags;
use crate::record::Quote;
use crate::OutputError;
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `quotes` to a CSV file at `output_path`
///
/// The file is created or truncated. It is closed on every return path,
/// including when a row fails to write.
///
/// # Arguments
///
/// * `output_path` - Where the CSV file should be written
/// * `quotes` - Records in output order
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(OutputError)` - The path is not writable or a write failed
pub fn write_quotes_csv(output_path: &Path, quotes: &[Quote]) -> Result<(), OutputError> {
    let file = File::create(output_path)?;
    write_quotes(file, quotes)
}

/// Writes the header and one row per quote to any writer
pub fn write_quotes<W: Write>(writer: W, quotes: &[Quote]) -> Result<(), OutputError> {
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(Quote::FIELDS)?;
    for quote in quotes {
        let tags = format_tags(quote.tags());
        csv_writer.write_record([quote.text(), quote.author(), tags.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
