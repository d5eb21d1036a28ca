use log::{debug, error, info};
use std::sync::{Arc, PoisonError, RwLock};

use super::transactions_model::{decode_transactions, encode_transactions, Transaction};
use crate::constants::TRANSACTIONS_STORAGE_KEY;
use crate::errors::Result;
use crate::storage::KeyValueSlot;

/// Append-only record of amount adjustments, persisted beside the goals.
///
/// Follows the same recovery rules as the goal store: a bad stored value is
/// logged and ignored, a failed write keeps the in-memory log.
pub struct TransactionLog {
    slot: Arc<dyn KeyValueSlot>,
    key: String,
    entries: RwLock<Vec<Transaction>>,
}

impl TransactionLog {
    pub fn new(slot: Arc<dyn KeyValueSlot>) -> Self {
        TransactionLog {
            slot,
            key: TRANSACTIONS_STORAGE_KEY.to_string(),
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> usize {
        let loaded = self
            .slot
            .get_item(&self.key)
            .and_then(|raw| match raw {
                Some(raw) => decode_transactions(&self.key, &raw),
                None => Ok(Vec::new()),
            });

        match loaded {
            Ok(transactions) => {
                info!("Loaded {} transactions from '{}'", transactions.len(), self.key);
                let count = transactions.len();
                *self.entries.write().unwrap_or_else(PoisonError::into_inner) = transactions;
                count
            }
            Err(e) => {
                error!("Error loading transactions: {}", e);
                self.entries
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .len()
            }
        }
    }

    /// Records a transaction and persists the whole log.
    pub fn append(&self, transaction: Transaction) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.push(transaction);
        self.write(&entries)
    }

    /// Drops every transaction of a goal and persists the log. Returns how many were removed.
    pub fn remove_for_goal(&self, goal_id: &str) -> Result<usize> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|tx| tx.goal_id != goal_id);
        let removed = before - entries.len();
        if removed == 0 {
            return Ok(0);
        }
        self.write(&entries)?;
        Ok(removed)
    }

    fn write(&self, entries: &[Transaction]) -> Result<()> {
        let result =
            encode_transactions(entries).and_then(|raw| self.slot.set_item(&self.key, &raw));
        match &result {
            Ok(()) => debug!("Saved {} transactions to '{}'", entries.len(), self.key),
            Err(e) => error!("Error saving transactions: {}", e),
        }
        result
    }

    /// Transactions of one goal, oldest first.
    pub fn for_goal(&self, goal_id: &str) -> Vec<Transaction> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|tx| tx.goal_id == goal_id)
            .cloned()
            .collect()
    }
}
