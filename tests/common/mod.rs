use std::sync::Mutex;

use expense_tracker::{ExpenseTrackerModel, ExpenseTrackerModelListener, ListenerError, Transaction};

/// State a listener observed during one `update` callback.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub transactions: Vec<Transaction>,
    pub matched_filter_indices: Vec<usize>,
}

/// Listener that records every state it is shown.
#[derive(Default)]
pub struct RecordingListener {
    observations: Mutex<Vec<Observation>>,
}

impl RecordingListener {
    pub fn observations(&self) -> Vec<Observation> {
        self.observations.lock().expect("lock observations").clone()
    }

    pub fn calls(&self) -> usize {
        self.observations.lock().expect("lock observations").len()
    }
}

impl ExpenseTrackerModelListener for RecordingListener {
    fn update(&self, model: &ExpenseTrackerModel) -> Result<(), ListenerError> {
        self.observations
            .lock()
            .map_err(|_| ListenerError::new("recording", "observation log poisoned"))?
            .push(Observation {
                transactions: model.transactions(),
                matched_filter_indices: model.matched_filter_indices(),
            });
        Ok(())
    }
}

pub fn sample(amount: f64, category: &str) -> Transaction {
    Transaction::new(amount, category)
}
