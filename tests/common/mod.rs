#![allow(dead_code)]

use txlens::domain::error::TxlensError;
pub use txlens::domain::record::TransactionRecord;
use txlens::ports::record_port::RecordPort;

pub struct MockRecordPort {
    pub records: Vec<TransactionRecord>,
    pub error: Option<String>,
}

impl MockRecordPort {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            error: None,
        }
    }

    pub fn with_records(mut self, records: Vec<TransactionRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl RecordPort for MockRecordPort {
    fn fetch_records(&self) -> Result<Vec<TransactionRecord>, TxlensError> {
        if let Some(reason) = &self.error {
            return Err(TxlensError::DataRead {
                path: "mock".to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.records.clone())
    }
}

pub fn make_record(id: &str, amount: f64, sender: &str, beneficiary: &str) -> TransactionRecord {
    TransactionRecord {
        id: id.to_string(),
        amount,
        sender_name: sender.to_string(),
        sender_age: 22,
        beneficiary_name: beneficiary.to_string(),
        beneficiary_age: 33,
        issue_id: 0,
        issue_solved: true,
        issue_message: String::new(),
    }
}

pub fn make_issue_record(
    id: &str,
    amount: f64,
    sender: &str,
    beneficiary: &str,
    issue_id: i64,
    solved: bool,
    message: &str,
) -> TransactionRecord {
    TransactionRecord {
        issue_id,
        issue_solved: solved,
        issue_message: message.to_string(),
        ..make_record(id, amount, sender, beneficiary)
    }
}

/// A small dataset in the shape of the real source data: one duplicated id,
/// clients on both sides, a mix of open and solved issues. The duplicate pair
/// is what puts Tom Shelby ahead of Arthur Shelby for the top-sender ranking:
/// Tom's raw-stream total is 1147.86 against Arthur's 985.0, while his
/// deduped total (837.86) would lose.
pub fn sample_records() -> Vec<TransactionRecord> {
    vec![
        make_issue_record(
            "663458",
            430.2,
            "Tom Shelby",
            "Alfie Solomons",
            1,
            false,
            "Looks like money laundering",
        ),
        make_issue_record(
            "1284564",
            310.0,
            "Tom Shelby",
            "Arthur Shelby",
            2,
            true,
            "Never gonna give you up",
        ),
        // Duplicate of the record above.
        make_issue_record(
            "1284564",
            310.0,
            "Tom Shelby",
            "Arthur Shelby",
            2,
            true,
            "Never gonna give you up",
        ),
        make_issue_record(
            "96132456",
            67.8,
            "Aunt Polly",
            "Aberama Gold",
            6,
            true,
            "Looks OK, compliance checked",
        ),
        make_issue_record(
            "5465465",
            985.0,
            "Arthur Shelby",
            "Ben Younger",
            15,
            false,
            "Something's fishy",
        ),
        make_issue_record(
            "1651665",
            97.66,
            "Tom Shelby",
            "Oswald Mosley",
            65,
            true,
            "Never gonna let you down",
        ),
    ]
}
