//! Concrete adapter implementations for ports.

pub mod json_adapter;
pub mod csv_adapter;
pub mod file_config_adapter;
pub mod text_report;

use crate::domain::error::TxlensError;
use crate::domain::record::RecordFormat;
use crate::ports::record_port::RecordPort;
use csv_adapter::CsvFileAdapter;
use json_adapter::JsonFileAdapter;
use std::path::Path;

/// Map a data path and an optional explicit format to a record port. When no
/// format is given it is inferred from the file extension.
pub fn open_source(
    path: &Path,
    format: Option<RecordFormat>,
) -> Result<Box<dyn RecordPort>, TxlensError> {
    let format = match format {
        Some(f) => f,
        None => {
            RecordFormat::from_path(path).ok_or_else(|| TxlensError::UnknownFormat {
                value: path.display().to_string(),
            })?
        }
    };

    Ok(match format {
        RecordFormat::Json => Box::new(JsonFileAdapter::new(path.to_path_buf())),
        RecordFormat::Csv => Box::new(CsvFileAdapter::new(path.to_path_buf())),
    })
}
