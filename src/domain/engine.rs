//! Transaction query engine.
//!
//! Two deduplication policies coexist and must not be conflated: the financial
//! totals ([`TransactionQueryEngine::total_amount`],
//! [`TransactionQueryEngine::total_amount_sent_by`]) count each transaction
//! `id` once, keeping the first occurrence in sequence order, while the
//! ranking and listing queries ([`TransactionQueryEngine::top3_by_amount`],
//! [`TransactionQueryEngine::top_sender`],
//! [`TransactionQueryEngine::solved_issue_messages`]) run over the raw record
//! stream with duplicates included, because they describe records rather than
//! canonical transaction values.

use crate::domain::error::TxlensError;
use crate::domain::record::TransactionRecord;
use std::collections::{HashMap, HashSet};

/// Read-only query surface over an immutable sequence of transaction records.
///
/// Every operation is a pure function of the held sequence; the engine has no
/// other state and exposes no mutation.
pub struct TransactionQueryEngine {
    records: Vec<TransactionRecord>,
}

impl TransactionQueryEngine {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Sum of `amount` over unique transactions (deduplicated by `id`,
    /// first occurrence wins). 0.0 for an empty sequence.
    pub fn total_amount(&self) -> f64 {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.id.as_str()))
            .map(|r| r.amount)
            .sum()
    }

    /// Sum of `amount` over unique transactions sent by `name`. The seen-set
    /// is shared across the whole filtered stream, so a duplicate id counts
    /// once even when its copies are interleaved with other senders' records.
    pub fn total_amount_sent_by(&self, name: &str) -> Result<f64, TxlensError> {
        require_client_name(name)?;
        let mut seen = HashSet::new();
        Ok(self
            .records
            .iter()
            .filter(|r| r.sender_name == name && seen.insert(r.id.as_str()))
            .map(|r| r.amount)
            .sum())
    }

    /// Largest `amount` across all records. Duplicates need no handling since
    /// max is idempotent to duplication. 0.0 for an empty sequence.
    pub fn max_amount(&self) -> f64 {
        self.records
            .iter()
            .map(|r| r.amount)
            .max_by(f64::total_cmp)
            .unwrap_or(0.0)
    }

    /// Count of distinct names appearing as sender or beneficiary. A name
    /// that plays both roles counts once. Exact string equality, no
    /// normalization.
    pub fn count_unique_clients(&self) -> usize {
        let mut names = HashSet::new();
        for record in &self.records {
            names.insert(record.sender_name.as_str());
            names.insert(record.beneficiary_name.as_str());
        }
        names.len()
    }

    /// True iff some record names the client as sender or beneficiary and has
    /// an unsolved issue. Short-circuits on the first match.
    pub fn has_open_compliance_issue(&self, name: &str) -> Result<bool, TxlensError> {
        require_client_name(name)?;
        Ok(self.records.iter().any(|r| {
            !r.issue_solved && (r.sender_name == name || r.beneficiary_name == name)
        }))
    }

    /// One representative record per beneficiary name. On collision the first
    /// record in sequence order is retained; later ones are discarded.
    pub fn transactions_by_beneficiary(&self) -> HashMap<&str, &TransactionRecord> {
        let mut map: HashMap<&str, &TransactionRecord> = HashMap::new();
        for record in &self.records {
            // Vacant-entry insert keeps the first record; never overwrite.
            map.entry(record.beneficiary_name.as_str()).or_insert(record);
        }
        map
    }

    /// Distinct `issue_id` values from records whose issue is unsolved.
    pub fn unsolved_issue_ids(&self) -> HashSet<i64> {
        self.records
            .iter()
            .filter(|r| !r.issue_solved)
            .map(|r| r.issue_id)
            .collect()
    }

    /// `issue_message` values from solved records, in sequence order, with
    /// duplicates preserved.
    pub fn solved_issue_messages(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.issue_solved)
            .map(|r| r.issue_message.as_str())
            .collect()
    }

    /// Up to 3 records with the largest `amount`, descending. Runs over the
    /// raw stream (duplicate ids both appear). The sort is stable, so ties
    /// keep their original relative order.
    pub fn top3_by_amount(&self) -> Vec<&TransactionRecord> {
        let mut ranked: Vec<&TransactionRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        ranked.truncate(3);
        ranked
    }

    /// Sender with the largest sum of `amount` over the raw stream (duplicate
    /// ids each contribute). None for an empty sequence. Ties are broken by
    /// the lexicographically greatest name among the maximal sums, so repeated
    /// runs agree.
    pub fn top_sender(&self) -> Option<&str> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for record in &self.records {
            *totals.entry(record.sender_name.as_str()).or_insert(0.0) += record.amount;
        }
        totals
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)))
            .map(|(name, _)| name)
    }
}

fn require_client_name(name: &str) -> Result<(), TxlensError> {
    if name.trim().is_empty() {
        return Err(TxlensError::BlankClientName);
    }
    Ok(())
}
