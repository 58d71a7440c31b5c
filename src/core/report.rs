use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes `value` as a single JSON line and flushes.
pub fn write_json_line<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
