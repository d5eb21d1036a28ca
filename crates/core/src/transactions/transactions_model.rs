//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::errors::{Error, PersistenceError, Result, ValidationError};
use crate::goals::goals_codec::{decimal_to_number, number_to_decimal};
use crate::goals::AmountDirection;
use crate::utils::time_utils::{parse_iso_string, to_iso_string};

/// A single add/subtract event recorded against a goal.
///
/// `amount` is the requested movement, not the effective one: a subtraction
/// clamped at zero still records the amount the user asked for.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub goal_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub direction: AmountDirection,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Raw persisted transaction record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTransaction {
    pub id: String,
    pub goal_id: String,
    pub amount: Number,
    #[serde(rename = "type")]
    pub direction: AmountDirection,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TryFrom<&Transaction> for StoredTransaction {
    type Error = Error;

    fn try_from(tx: &Transaction) -> Result<Self> {
        Ok(Self {
            id: tx.id.clone(),
            goal_id: tx.goal_id.clone(),
            amount: decimal_to_number("amount", tx.amount)?,
            direction: tx.direction,
            date: to_iso_string(&tx.date),
            description: tx.description.clone(),
        })
    }
}

impl TryFrom<StoredTransaction> for Transaction {
    type Error = Error;

    fn try_from(stored: StoredTransaction) -> Result<Self> {
        if stored.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if stored.goal_id.trim().is_empty() {
            return Err(ValidationError::MissingField("goalId".to_string()).into());
        }
        let amount = number_to_decimal("amount", &stored.amount)?;
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be positive, got {}",
                stored.amount
            ))
            .into());
        }
        Ok(Self {
            id: stored.id,
            goal_id: stored.goal_id,
            amount,
            direction: stored.direction,
            date: parse_iso_string(&stored.date)?,
            description: stored.description,
        })
    }
}

pub fn encode_transactions(transactions: &[Transaction]) -> Result<String> {
    let records = transactions
        .iter()
        .map(StoredTransaction::try_from)
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string(&records)?)
}

pub fn decode_transactions(key: &str, raw: &str) -> Result<Vec<Transaction>> {
    let malformed = |message: String| -> Error {
        PersistenceError::Malformed {
            key: key.to_string(),
            message,
        }
        .into()
    };

    let records: Vec<StoredTransaction> =
        serde_json::from_str(raw).map_err(|e| malformed(e.to_string()))?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Transaction::try_from(record).map_err(|e| malformed(format!("record {}: {}", index, e)))
        })
        .collect()
}
