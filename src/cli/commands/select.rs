use crate::core::StoreEntry;
use crate::trains;
use anyhow::Result;
use log::debug;
use std::io::Write;

/// Print the trains whose type matches `typ` exactly
pub fn execute_select<W: Write>(records: &[StoreEntry], typ: &str, out: &mut W) -> Result<()> {
    let matches = trains::select(records, typ);
    debug!("{} of {} trains have type {typ:?}", matches.len(), records.len());

    trains::print_selection(&matches, out)?;
    Ok(())
}
