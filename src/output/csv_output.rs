//! CSV export

use crate::output::OutputResult;
use crate::record::ResultSet;
use std::io::Write;

/// Writes records as CSV with a header row taken from the record's fields
///
/// A missing category is written as an empty field.
pub fn write_csv<W: Write>(results: &ResultSet, writer: W) -> OutputResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in results {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
