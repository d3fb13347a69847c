use crate::core::StoreEntry;
use crate::trains;
use log::info;

/// Options for the add command
#[derive(Debug, Clone)]
pub struct AddConfig {
    pub name: String,
    pub time: i64,
    pub typ: Option<String>,
}

/// Append a train to the loaded records. Saving is left to the caller
pub fn execute_add(records: Vec<StoreEntry>, config: AddConfig) -> Vec<StoreEntry> {
    let records = trains::add(records, config.name, config.time, config.typ);
    info!("train list now holds {} entries", records.len());
    records
}
