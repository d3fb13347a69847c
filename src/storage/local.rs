use super::RecordStore;
use crate::core::{StaffError, StaffResult, StoreEntry};
use log::{debug, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::path::PathBuf;

const INDENT: &[u8] = b"    ";

/// ローカルJSONファイル用のストレージバックエンド
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 4スペースインデント、非ASCII文字はエスケープせずに出力
    fn to_pretty_json(records: &[StoreEntry]) -> StaffResult<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
        records
            .serialize(&mut serializer)
            .map_err(StaffError::serialize)?;
        Ok(buffer)
    }
}

impl RecordStore for JsonFileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> StaffResult<Vec<StoreEntry>> {
        if !self.exists() {
            debug!("{} not found, starting with an empty list", self.path.display());
            return Ok(Vec::new());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StaffError::io(&self.path, e))?;
        let document: Value =
            serde_json::from_str(&content).map_err(|e| StaffError::parse(&self.path, e))?;
        let Value::Array(values) = document else {
            return Err(StaffError::not_an_array(&self.path));
        };

        let records: Vec<StoreEntry> = values.into_iter().map(StoreEntry::from).collect();
        for (idx, entry) in records.iter().enumerate() {
            if entry.is_malformed() {
                warn!(
                    "{}: element {} is not a valid train record",
                    self.path.display(),
                    idx + 1
                );
            }
        }

        debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save(&self, records: &[StoreEntry]) -> StaffResult<()> {
        let data = Self::to_pretty_json(records)?;
        std::fs::write(&self.path, data).map_err(|e| StaffError::io(&self.path, e))?;
        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
