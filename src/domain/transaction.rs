//! Expense record tracked by the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Displayable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default = "Transaction::default_id")]
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            timestamp: Utc::now(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// A transaction carrying the nil identifier stands for "no transaction"
    /// and is never accepted into a ledger.
    pub fn is_absent(&self) -> bool {
        self.id.is_nil()
    }

    pub fn default_id() -> Uuid {
        Uuid::nil()
    }
}

/// Two transactions are the same record when their identifiers match; a
/// clone keeps its source's identity even after its fields are edited.
impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{} {:.2}]", self.id, self.category, self.amount)
    }
}
