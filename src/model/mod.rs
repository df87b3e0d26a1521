//! In-memory state container for the expense tracker and its observer protocol.

pub mod expense_tracker_model;
pub mod listener;
pub mod shared;

pub use expense_tracker_model::ExpenseTrackerModel;
pub use listener::{ExpenseTrackerModelListener, ListenerHandle};
pub use shared::SharedExpenseTrackerModel;
