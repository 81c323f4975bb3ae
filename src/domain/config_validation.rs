//! Configuration validation.
//!
//! Validates all config fields up front, before any file I/O.

use crate::domain::clients::parse_clients;
use crate::domain::error::TxlensError;
use crate::domain::record::RecordFormat;
use crate::ports::config_port::ConfigPort;

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), TxlensError> {
    validate_data_path(config)?;
    validate_data_format(config)?;
    Ok(())
}

pub fn validate_report_config(config: &dyn ConfigPort) -> Result<(), TxlensError> {
    validate_clients(config)?;
    Ok(())
}

fn validate_data_path(config: &dyn ConfigPort) -> Result<(), TxlensError> {
    match config.get_string("data", "path") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(TxlensError::ConfigMissing {
            section: "data".to_string(),
            key: "path".to_string(),
        }),
    }
}

fn validate_data_format(config: &dyn ConfigPort) -> Result<(), TxlensError> {
    // Optional; when absent the format is inferred from the file extension.
    match config.get_string("data", "format") {
        None => Ok(()),
        Some(value) => match RecordFormat::parse(&value) {
            Ok(_) => Ok(()),
            Err(_) => Err(TxlensError::ConfigInvalid {
                section: "data".to_string(),
                key: "format".to_string(),
                reason: format!("unknown format '{value}', expected json or csv"),
            }),
        },
    }
}

fn validate_clients(config: &dyn ConfigPort) -> Result<(), TxlensError> {
    match config.get_string("report", "clients") {
        None => Ok(()),
        Some(value) => match parse_clients(&value) {
            Ok(_) => Ok(()),
            Err(e) => Err(TxlensError::ConfigInvalid {
                section: "report".to_string(),
                key: "clients".to_string(),
                reason: e.to_string(),
            }),
        },
    }
}
