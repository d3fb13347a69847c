use crate::core::StoreEntry;
use crate::trains;
use anyhow::Result;
use std::io::Write;

/// Print every train as a table
pub fn execute_display<W: Write>(records: &[StoreEntry], out: &mut W) -> Result<()> {
    trains::display(records, out)?;
    Ok(())
}
