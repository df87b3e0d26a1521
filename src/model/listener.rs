//! Observer contract for [`ExpenseTrackerModel`] state changes.

use std::sync::Arc;

use super::ExpenseTrackerModel;
use crate::errors::ListenerError;

/// Receives a synchronous callback after every successful model mutation.
///
/// Implementations pull the new state through the model's public accessors;
/// the shared borrow prevents re-entrant mutation from inside a callback.
pub trait ExpenseTrackerModelListener: Send + Sync {
    fn update(&self, model: &ExpenseTrackerModel) -> Result<(), ListenerError>;

    /// Label used in log events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> ExpenseTrackerModelListener for F
where
    F: Fn(&ExpenseTrackerModel) -> Result<(), ListenerError> + Send + Sync,
{
    fn update(&self, model: &ExpenseTrackerModel) -> Result<(), ListenerError> {
        self(model)
    }
}

/// Shared handle under which a listener is registered.
pub type ListenerHandle = Arc<dyn ExpenseTrackerModelListener>;

/// Registrations are keyed by allocation, so two handles are the same
/// listener only when they point at the same object.
pub(crate) fn same_listener(left: &ListenerHandle, right: &ListenerHandle) -> bool {
    std::ptr::eq(
        Arc::as_ptr(left) as *const (),
        Arc::as_ptr(right) as *const (),
    )
}
