//! Audit trail of amount adjustments.

mod transaction_log;
mod transactions_model;

pub use transaction_log::TransactionLog;
pub use transactions_model::{decode_transactions, encode_transactions, StoredTransaction, Transaction};
