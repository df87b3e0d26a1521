//! Entities stored by the expense tracker model.

pub mod common;
pub mod transaction;

pub use common::Displayable;
pub use transaction::Transaction;
