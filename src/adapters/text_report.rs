//! Text file report adapter.

use crate::domain::error::TxlensError;
use crate::domain::summary::AuditSummary;
use crate::ports::report_port::ReportPort;
use std::fs;
use std::path::Path;

/// Writes the rendered audit summary to a plain-text file.
pub struct TextReportAdapter;

impl ReportPort for TextReportAdapter {
    fn write(&self, summary: &AuditSummary, output_path: &Path) -> Result<(), TxlensError> {
        log::debug!("writing report to {}", output_path.display());
        fs::write(output_path, summary.render()).map_err(|e| TxlensError::Report {
            reason: format!("{}: {}", output_path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::TransactionQueryEngine;
    use tempfile::TempDir;

    #[test]
    fn writes_rendered_summary() {
        let engine = TransactionQueryEngine::new(vec![]);
        let summary = AuditSummary::compute(&engine, &[]).unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        TextReportAdapter.write(&summary, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, summary.render());
        assert!(content.contains("Transaction Audit Summary"));
    }

    #[test]
    fn unwritable_path_is_a_report_error() {
        let engine = TransactionQueryEngine::new(vec![]);
        let summary = AuditSummary::compute(&engine, &[]).unwrap();

        let result = TextReportAdapter.write(&summary, Path::new("/nonexistent/dir/report.txt"));
        assert!(matches!(result, Err(TxlensError::Report { .. })));
    }
}
