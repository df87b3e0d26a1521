use tracing::{debug, trace, warn};

use super::listener::{same_listener, ListenerHandle};
use crate::domain::{Displayable, Transaction};
use crate::errors::ModelError;

/// Owns the ledger of transactions, the most recent filter result, and the
/// listeners that observe both.
#[derive(Default)]
pub struct ExpenseTrackerModel {
    transactions: Vec<Transaction>,
    matched_filter_indices: Vec<usize>,
    listeners: Vec<ListenerHandle>,
}

impl ExpenseTrackerModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `transaction` to the ledger and clears the filter result.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), ModelError> {
        if transaction.is_absent() {
            warn!("rejected transaction without identifier");
            return Err(ModelError::InvalidArgument(
                "The new transaction must be present.".into(),
            ));
        }
        debug!(transaction = %transaction.display_label(), "adding transaction");
        self.transactions.push(transaction);
        self.matched_filter_indices.clear();
        self.state_changed()
    }

    /// Removes the first transaction equal to `transaction`, if any.
    ///
    /// A missing transaction leaves the ledger untouched, but the filter
    /// result is still cleared and listeners are still notified.
    pub fn remove_transaction(&mut self, transaction: &Transaction) -> Result<(), ModelError> {
        match self.transactions.iter().position(|txn| txn == transaction) {
            Some(index) => {
                self.transactions.remove(index);
                debug!(index, remaining = self.transactions.len(), "removed transaction");
            }
            None => {
                debug!(transaction = %transaction.display_label(), "transaction not in ledger");
            }
        }
        self.matched_filter_indices.clear();
        self.state_changed()
    }

    /// Returns a snapshot of the ledger in insertion order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Replaces the filter result with a copy of `indices`.
    ///
    /// Every index must address the ledger as it is now; on any violation
    /// the call is rejected and the stored result is left as it was.
    pub fn set_matched_filter_indices(
        &mut self,
        indices: Option<&[usize]>,
    ) -> Result<(), ModelError> {
        let Some(indices) = indices else {
            warn!("rejected missing filter index list");
            return Err(ModelError::InvalidArgument(
                "The matched filter indices list must be present.".into(),
            ));
        };
        let len = self.transactions.len();
        if let Some(bad) = indices.iter().find(|&&index| index >= len) {
            warn!(index = *bad, ledger_len = len, "rejected out-of-range filter index");
            return Err(ModelError::InvalidArgument(format!(
                "Each matched filter index must be between 0 (inclusive) and the number of transactions ({len}, exclusive); got {bad}."
            )));
        }
        self.matched_filter_indices.clear();
        self.matched_filter_indices.extend_from_slice(indices);
        debug!(matched = indices.len(), "filter result updated");
        self.state_changed()
    }

    /// Returns a copy of the current filter result.
    pub fn matched_filter_indices(&self) -> Vec<usize> {
        self.matched_filter_indices.clone()
    }

    /// Registers `listener`; returns `false` if it is absent or already registered.
    pub fn register(&mut self, listener: Option<ListenerHandle>) -> bool {
        match listener {
            Some(listener) if !self.contains_listener(&listener) => {
                debug!(listener = listener.name(), "listener registered");
                self.listeners.push(listener);
                true
            }
            _ => false,
        }
    }

    /// Unregisters `listener`; returns `false` if it is absent or not registered.
    pub fn unregister(&mut self, listener: Option<&ListenerHandle>) -> bool {
        let Some(listener) = listener else {
            return false;
        };
        match self
            .listeners
            .iter()
            .position(|registered| same_listener(registered, listener))
        {
            Some(index) => {
                // Registry order carries no meaning.
                self.listeners.swap_remove(index);
                debug!(listener = listener.name(), "listener unregistered");
                true
            }
            None => false,
        }
    }

    pub fn contains_listener(&self, listener: &ListenerHandle) -> bool {
        self.listeners
            .iter()
            .any(|registered| same_listener(registered, listener))
    }

    pub fn number_of_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Notifies every listener. The first failure stops the fan-out and is
    /// returned to the caller; the mutation that triggered it stays applied.
    fn state_changed(&self) -> Result<(), ModelError> {
        for listener in &self.listeners {
            trace!(listener = listener.name(), "dispatching state change");
            listener.update(self)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ExpenseTrackerModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTrackerModel")
            .field("transactions", &self.transactions)
            .field("matched_filter_indices", &self.matched_filter_indices)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
