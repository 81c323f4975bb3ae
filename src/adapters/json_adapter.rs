//! JSON file record adapter.

use crate::domain::error::TxlensError;
use crate::domain::record::TransactionRecord;
use crate::ports::record_port::RecordPort;
use std::fs;
use std::path::PathBuf;

/// Loads a JSON array of transaction records from a file.
pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RecordPort for JsonFileAdapter {
    fn fetch_records(&self) -> Result<Vec<TransactionRecord>, TxlensError> {
        log::debug!("reading JSON records from {}", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|e| TxlensError::DataRead {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let records: Vec<TransactionRecord> =
            serde_json::from_str(&content).map_err(|e| TxlensError::DataParse {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        log::debug!("deserialized {} records", records.len());
        Ok(records)
    }
}
