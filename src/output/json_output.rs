//! JSON export

use crate::output::OutputResult;
use crate::record::ResultSet;
use std::io::Write;

/// Writes records as a pretty-printed JSON array
///
/// A missing category is written as `null`.
pub fn write_json<W: Write>(results: &ResultSet, mut writer: W) -> OutputResult<()> {
    serde_json::to_writer_pretty(&mut writer, results.as_slice())?;
    writer.write_all(b"\n")?;
    Ok(())
}
