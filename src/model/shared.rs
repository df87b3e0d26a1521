//! Single-lock wrapper for embedding the model where access crosses threads.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{ExpenseTrackerModel, ListenerHandle};
use crate::domain::Transaction;
use crate::errors::ModelError;

/// Cloneable handle guarding a whole [`ExpenseTrackerModel`] with one mutex.
///
/// Every operation, including the listener fan-out, runs while the lock is
/// held, so listeners must not call back into the same handle.
#[derive(Clone, Default)]
pub struct SharedExpenseTrackerModel {
    inner: Arc<Mutex<ExpenseTrackerModel>>,
}

impl SharedExpenseTrackerModel {
    pub fn new(model: ExpenseTrackerModel) -> Self {
        Self {
            inner: Arc::new(Mutex::new(model)),
        }
    }

    pub fn with<R>(&self, read: impl FnOnce(&ExpenseTrackerModel) -> R) -> Result<R, ModelError> {
        let guard = self.lock()?;
        Ok(read(&*guard))
    }

    pub fn with_mut<R>(
        &self,
        write: impl FnOnce(&mut ExpenseTrackerModel) -> Result<R, ModelError>,
    ) -> Result<R, ModelError> {
        let mut guard = self.lock()?;
        write(&mut *guard)
    }

    pub fn add_transaction(&self, transaction: Transaction) -> Result<(), ModelError> {
        self.with_mut(|model| model.add_transaction(transaction))
    }

    pub fn remove_transaction(&self, transaction: &Transaction) -> Result<(), ModelError> {
        self.with_mut(|model| model.remove_transaction(transaction))
    }

    pub fn set_matched_filter_indices(&self, indices: Option<&[usize]>) -> Result<(), ModelError> {
        self.with_mut(|model| model.set_matched_filter_indices(indices))
    }

    pub fn transactions(&self) -> Result<Vec<Transaction>, ModelError> {
        self.with(ExpenseTrackerModel::transactions)
    }

    pub fn matched_filter_indices(&self) -> Result<Vec<usize>, ModelError> {
        self.with(ExpenseTrackerModel::matched_filter_indices)
    }

    pub fn register(&self, listener: Option<ListenerHandle>) -> Result<bool, ModelError> {
        self.with_mut(|model| Ok(model.register(listener)))
    }

    pub fn unregister(&self, listener: Option<&ListenerHandle>) -> Result<bool, ModelError> {
        self.with_mut(|model| Ok(model.unregister(listener)))
    }

    fn lock(&self) -> Result<MutexGuard<'_, ExpenseTrackerModel>, ModelError> {
        self.inner.lock().map_err(|_| ModelError::Poisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ListenerError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn concurrent_adds_are_serialized() {
        let shared = SharedExpenseTrackerModel::default();
        let workers: Vec<_> = (0..4)
            .map(|worker| {
                let handle = shared.clone();
                thread::spawn(move || {
                    for idx in 0..25 {
                        let txn = Transaction::new((worker * 100 + idx) as f64, "food");
                        handle.add_transaction(txn).expect("add transaction");
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().expect("worker finished");
        }

        assert_eq!(shared.transactions().unwrap().len(), 100);
        assert!(shared.matched_filter_indices().unwrap().is_empty());
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let shared = SharedExpenseTrackerModel::default();
        let handle = shared.clone();
        let _ = thread::spawn(move || {
            let _ = handle.with_mut(|_| -> Result<(), ModelError> { panic!("poison the lock") });
        })
        .join();

        let err = shared.transactions().expect_err("lock is poisoned");
        assert!(matches!(err, ModelError::Poisoned));
    }

    #[test]
    fn filter_updates_go_through_the_lock() {
        let shared = SharedExpenseTrackerModel::default();
        shared.add_transaction(Transaction::new(1.0, "food")).unwrap();
        shared.add_transaction(Transaction::new(2.0, "bills")).unwrap();

        shared.set_matched_filter_indices(Some(&[1])).unwrap();

        assert_eq!(shared.matched_filter_indices().unwrap(), vec![1]);
        assert_eq!(shared.with(|model| model.transaction_count()).unwrap(), 2);
    }

    #[test]
    fn registry_and_removal_go_through_the_lock() {
        let shared = SharedExpenseTrackerModel::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let listener: ListenerHandle =
            Arc::new(move |_: &ExpenseTrackerModel| -> Result<(), ListenerError> {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        let txn = Transaction::new(4.0, "food");
        shared.add_transaction(txn.clone()).unwrap();

        assert!(shared.register(Some(Arc::clone(&listener))).unwrap());
        assert!(!shared.register(Some(Arc::clone(&listener))).unwrap());

        shared.remove_transaction(&txn).unwrap();
        assert!(shared.transactions().unwrap().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(shared.unregister(Some(&listener)).unwrap());
        assert!(!shared.unregister(Some(&listener)).unwrap());
        shared.add_transaction(Transaction::new(5.0, "food")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
