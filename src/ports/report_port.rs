//! Report output port trait.

use crate::domain::error::TxlensError;
use crate::domain::summary::AuditSummary;
use std::path::Path;

/// Port for writing a computed audit summary somewhere durable.
pub trait ReportPort {
    fn write(&self, summary: &AuditSummary, output_path: &Path) -> Result<(), TxlensError>;
}
