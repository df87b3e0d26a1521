#![doc(test(attr(deny(warnings))))]

//! Expense Tracker core: the transaction ledger, the cached result of the
//! last applied filter, and the listeners notified whenever either changes.

pub mod config;
pub mod domain;
pub mod errors;
pub mod model;
pub mod utils;

pub use domain::Transaction;
pub use errors::{ConfigError, ListenerError, ModelError};
pub use model::{
    ExpenseTrackerModel, ExpenseTrackerModelListener, ListenerHandle, SharedExpenseTrackerModel,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing from the configuration in the default data
/// directory, using defaults when it is missing or unreadable.
pub fn init() {
    let config = config::ConfigManager::from_default_location()
        .load()
        .unwrap_or_default();
    init_with_config(&config);
}

/// Initializes global tracing using the filter directive from `config`.
pub fn init_with_config(config: &config::Config) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(&config.log_filter);
        tracing::info!(filter = %config.log_filter, "Expense Tracker tracing initialized.");
    });
}
