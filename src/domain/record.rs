//! Transaction record representation.

use crate::domain::error::TxlensError;
use serde::Deserialize;
use std::hash::{Hash, Hasher};
use std::path::Path;

/// One money transfer and its attached compliance-issue status.
///
/// Identity is defined by `id` alone: two records with the same `id` describe
/// the same transaction for equality and hashing, even when the other fields
/// differ. The source data may contain such duplicates.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub amount: f64,
    pub sender_name: String,
    pub sender_age: u32,
    pub beneficiary_name: String,
    pub beneficiary_age: u32,
    pub issue_id: i64,
    pub issue_solved: bool,
    pub issue_message: String,
}

impl PartialEq for TransactionRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TransactionRecord {}

impl Hash for TransactionRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// On-disk interchange format for transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Csv,
}

impl RecordFormat {
    pub fn parse(value: &str) -> Result<Self, TxlensError> {
        match value.to_lowercase().as_str() {
            "json" => Ok(RecordFormat::Json),
            "csv" => Ok(RecordFormat::Csv),
            _ => Err(TxlensError::UnknownFormat {
                value: value.to_string(),
            }),
        }
    }

    /// Infer the format from a file extension, if it is one we recognize.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())?
            .to_lowercase()
            .as_str()
        {
            "json" => Some(RecordFormat::Json),
            "csv" => Some(RecordFormat::Csv),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn record(id: &str, amount: f64) -> TransactionRecord {
        TransactionRecord {
            id: id.to_string(),
            amount,
            sender_name: "Tom Shelby".into(),
            sender_age: 22,
            beneficiary_name: "Alfie Solomons".into(),
            beneficiary_age: 33,
            issue_id: 1,
            issue_solved: false,
            issue_message: "Looks suspicious".into(),
        }
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = record("663458", 430.2);
        let mut b = record("663458", 9999.0);
        b.sender_name = "Grace Burgess".into();
        b.issue_solved = true;
        assert_eq!(a, b);

        let c = record("1284564", 430.2);
        assert_ne!(a, c);
    }

    #[test]
    fn hashing_collapses_duplicate_ids() {
        let mut set = HashSet::new();
        set.insert(record("663458", 430.2));
        set.insert(record("663458", 430.2));
        set.insert(record("1284564", 150.2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "id": "663458",
            "amount": 430.2,
            "senderName": "Tom Shelby",
            "senderAge": 22,
            "beneficiaryName": "Alfie Solomons",
            "beneficiaryAge": 33,
            "issueId": 1,
            "issueSolved": false,
            "issueMessage": "Looks like money laundering"
        }"#;
        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "663458");
        assert_eq!(record.amount, 430.2);
        assert_eq!(record.sender_name, "Tom Shelby");
        assert_eq!(record.beneficiary_name, "Alfie Solomons");
        assert_eq!(record.issue_id, 1);
        assert!(!record.issue_solved);
    }

    #[test]
    fn format_parse_accepts_known_values() {
        assert_eq!(RecordFormat::parse("json").unwrap(), RecordFormat::Json);
        assert_eq!(RecordFormat::parse("CSV").unwrap(), RecordFormat::Csv);
        assert!(matches!(
            RecordFormat::parse("xml"),
            Err(TxlensError::UnknownFormat { value }) if value == "xml"
        ));
    }

    #[test]
    fn format_inferred_from_extension() {
        assert_eq!(
            RecordFormat::from_path(&PathBuf::from("data/records.json")),
            Some(RecordFormat::Json)
        );
        assert_eq!(
            RecordFormat::from_path(&PathBuf::from("records.CSV")),
            Some(RecordFormat::Csv)
        );
        assert_eq!(RecordFormat::from_path(&PathBuf::from("records.xml")), None);
        assert_eq!(RecordFormat::from_path(&PathBuf::from("records")), None);
    }
}
