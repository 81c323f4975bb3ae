//! CSV file record adapter.

use crate::domain::error::TxlensError;
use crate::domain::record::TransactionRecord;
use crate::ports::record_port::RecordPort;
use csv::Trim;
use std::fs::File;
use std::path::PathBuf;

/// Loads transaction records from a headered CSV file. Headers use the same
/// camelCase names as the JSON schema.
pub struct CsvFileAdapter {
    path: PathBuf,
}

impl CsvFileAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RecordPort for CsvFileAdapter {
    fn fetch_records(&self) -> Result<Vec<TransactionRecord>, TxlensError> {
        log::debug!("reading CSV records from {}", self.path.display());
        let file = File::open(&self.path).map_err(|e| TxlensError::DataRead {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut rdr = csv::ReaderBuilder::new().trim(Trim::All).from_reader(file);

        let mut records = Vec::new();
        for result in rdr.deserialize::<TransactionRecord>() {
            let record = result.map_err(|e| TxlensError::DataParse {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
            records.push(record);
        }

        log::debug!("deserialized {} records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str =
        "id,amount,senderName,senderAge,beneficiaryName,beneficiaryAge,issueId,issueSolved,issueMessage";

    fn write_csv(dir: &TempDir, rows: &[&str]) -> PathBuf {
        let path = dir.path().join("records.csv");
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn fetch_records_parses_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            &[
                "663458,430.2,Tom Shelby,22,Alfie Solomons,33,1,false,Looks like money laundering",
                "1284564,150.2,Tom Shelby,22,Arthur Shelby,60,2,true,Never gonna give you up",
            ],
        );

        let records = CsvFileAdapter::new(path).fetch_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "663458");
        assert_eq!(records[0].sender_name, "Tom Shelby");
        assert_eq!(records[0].issue_id, 1);
        assert!(!records[0].issue_solved);
        assert!(records[1].issue_solved);
    }

    #[test]
    fn whitespace_around_fields_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            &[" 663458 , 430.2 , Tom Shelby ,22, Alfie Solomons ,33,1, false , fine "],
        );

        let records = CsvFileAdapter::new(path).fetch_records().unwrap();
        assert_eq!(records[0].id, "663458");
        assert_eq!(records[0].sender_name, "Tom Shelby");
        assert_eq!(records[0].issue_message, "fine");
    }

    #[test]
    fn header_only_file_yields_no_records() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, &[]);

        let records = CsvFileAdapter::new(path).fetch_records().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let adapter = CsvFileAdapter::new(PathBuf::from("/nonexistent/records.csv"));
        assert!(matches!(
            adapter.fetch_records(),
            Err(TxlensError::DataRead { .. })
        ));
    }

    #[test]
    fn bad_field_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            &["663458,not_a_number,Tom Shelby,22,Alfie Solomons,33,1,false,msg"],
        );

        assert!(matches!(
            CsvFileAdapter::new(path).fetch_records(),
            Err(TxlensError::DataParse { .. })
        ));
    }
}
