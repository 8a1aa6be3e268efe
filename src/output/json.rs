use crate::Result;
use serde::Serialize;
use std::io::Write;

/// Writes `value` as a single line of JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}
