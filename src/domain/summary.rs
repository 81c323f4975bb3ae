//! Audit summary and dataset profile computation.

use crate::domain::engine::TransactionQueryEngine;
use crate::domain::error::TxlensError;
use crate::domain::record::TransactionRecord;
use std::collections::HashSet;
use std::fmt::Write;

/// One line of the top-3 ranking, snapshotted from a record.
#[derive(Debug, Clone, PartialEq)]
pub struct TopEntry {
    pub id: String,
    pub sender_name: String,
    pub beneficiary_name: String,
    pub amount: f64,
}

/// Per-client section of the audit summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSection {
    pub name: String,
    pub sent_total: f64,
    pub has_open_issue: bool,
}

/// Results of running every engine query once, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditSummary {
    pub record_count: usize,
    pub total_amount: f64,
    pub max_amount: f64,
    pub unique_clients: usize,
    pub top3: Vec<TopEntry>,
    pub top_sender: Option<String>,
    pub unsolved_issue_ids: Vec<i64>,
    pub solved_message_count: usize,
    pub clients: Vec<ClientSection>,
}

impl AuditSummary {
    /// Run the full query surface and build per-client sections for each
    /// requested client. Fails only when a requested client name is blank.
    pub fn compute(
        engine: &TransactionQueryEngine,
        clients: &[String],
    ) -> Result<AuditSummary, TxlensError> {
        let top3 = engine
            .top3_by_amount()
            .into_iter()
            .map(|r| TopEntry {
                id: r.id.clone(),
                sender_name: r.sender_name.clone(),
                beneficiary_name: r.beneficiary_name.clone(),
                amount: r.amount,
            })
            .collect();

        // Sorted for stable display; the engine hands back a set.
        let mut unsolved_issue_ids: Vec<i64> = engine.unsolved_issue_ids().into_iter().collect();
        unsolved_issue_ids.sort_unstable();

        let mut client_sections = Vec::with_capacity(clients.len());
        for name in clients {
            client_sections.push(ClientSection {
                name: name.clone(),
                sent_total: engine.total_amount_sent_by(name)?,
                has_open_issue: engine.has_open_compliance_issue(name)?,
            });
        }

        Ok(AuditSummary {
            record_count: engine.records().len(),
            total_amount: engine.total_amount(),
            max_amount: engine.max_amount(),
            unique_clients: engine.count_unique_clients(),
            top3,
            top_sender: engine.top_sender().map(|s| s.to_string()),
            unsolved_issue_ids,
            solved_message_count: engine.solved_issue_messages().len(),
            clients: client_sections,
        })
    }

    /// Fixed-width text block printed by the report command.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Transaction Audit Summary ===");
        let _ = writeln!(out, "Records:          {}", self.record_count);
        let _ = writeln!(out, "Total Amount:     {:.2}", self.total_amount);
        let _ = writeln!(out, "Max Amount:       {:.2}", self.max_amount);
        let _ = writeln!(out, "Unique Clients:   {}", self.unique_clients);
        let _ = writeln!(
            out,
            "Top Sender:       {}",
            self.top_sender.as_deref().unwrap_or("no result")
        );
        let ids: Vec<String> = self
            .unsolved_issue_ids
            .iter()
            .map(|id| id.to_string())
            .collect();
        let _ = writeln!(
            out,
            "Unsolved Issues:  {}",
            if ids.is_empty() {
                "none".to_string()
            } else {
                ids.join(", ")
            }
        );
        let _ = writeln!(out, "Solved Messages:  {}", self.solved_message_count);

        if !self.top3.is_empty() {
            let _ = writeln!(out, "\n=== Top Transactions by Amount ===");
            for (i, entry) in self.top3.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {}  {} -> {}  {:.2}",
                    i + 1,
                    entry.id,
                    entry.sender_name,
                    entry.beneficiary_name,
                    entry.amount,
                );
            }
        }

        if !self.clients.is_empty() {
            let _ = writeln!(out, "\n=== Clients ===");
            for client in &self.clients {
                let _ = writeln!(
                    out,
                    "  {}: sent {:.2}, open issues: {}",
                    client.name,
                    client.sent_total,
                    if client.has_open_issue { "yes" } else { "no" },
                );
            }
        }

        out
    }
}

/// Acquisition-side shape of a loaded dataset, for the info command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetProfile {
    pub record_count: usize,
    pub distinct_transactions: usize,
    pub duplicate_records: usize,
    pub distinct_clients: usize,
    pub open_issue_records: usize,
    pub solved_issue_records: usize,
}

impl DatasetProfile {
    pub fn compute(records: &[TransactionRecord]) -> Self {
        let mut ids = HashSet::new();
        let mut clients = HashSet::new();
        let mut open = 0usize;

        for record in records {
            ids.insert(record.id.as_str());
            clients.insert(record.sender_name.as_str());
            clients.insert(record.beneficiary_name.as_str());
            if !record.issue_solved {
                open += 1;
            }
        }

        DatasetProfile {
            record_count: records.len(),
            distinct_transactions: ids.len(),
            duplicate_records: records.len() - ids.len(),
            distinct_clients: clients.len(),
            open_issue_records: open,
            solved_issue_records: records.len() - open,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Records:               {}", self.record_count);
        let _ = writeln!(out, "Distinct Transactions: {}", self.distinct_transactions);
        let _ = writeln!(out, "Duplicate Records:     {}", self.duplicate_records);
        let _ = writeln!(out, "Distinct Clients:      {}", self.distinct_clients);
        let _ = writeln!(out, "Open Issue Records:    {}", self.open_issue_records);
        let _ = writeln!(out, "Solved Issue Records:  {}", self.solved_issue_records);
        out
    }
}
