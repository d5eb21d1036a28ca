//! Persisted representation of goals.
//!
//! The stored layout is a JSON array of flat records with camelCase keys,
//! numeric amounts and ISO-8601 timestamps. Decoding goes through
//! [`StoredGoal`] and explicit per-field checks; nothing read back from the
//! slot is trusted before it has been validated.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;

use super::goals_model::SavingGoal;
use crate::errors::{Error, PersistenceError, Result, ValidationError};
use crate::utils::time_utils::{parse_iso_string, to_iso_string};

/// Raw persisted goal record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredGoal {
    pub id: String,
    pub title: String,
    pub target_amount: Number,
    pub current_amount: Number,
    pub emoji: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Converts an amount to a JSON number.
///
/// Fails instead of rounding: an amount that would not read back unchanged is
/// never written.
pub(crate) fn decimal_to_number(field: &str, value: Decimal) -> Result<Number> {
    value
        .to_f64()
        .and_then(Number::from_f64)
        .filter(|number| number_to_decimal(field, number).is_ok_and(|back| back == value))
        .ok_or_else(|| {
            Error::Serialization(format!(
                "{} {} cannot be stored as a number without losing precision",
                field, value
            ))
        })
}

/// Whether `value` survives being written and read back as a JSON number.
pub(crate) fn is_exactly_storable(value: Decimal) -> bool {
    decimal_to_number("amount", value).is_ok()
}

/// Converts a JSON number back to an amount.
///
/// Goes through the number's shortest textual form, so `250.75` comes back as
/// exactly `250.75` rather than the nearest binary fraction.
pub(crate) fn number_to_decimal(field: &str, value: &Number) -> Result<Decimal> {
    let text = value.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "{} is not a valid amount ({}): {}",
                field, text, e
            )))
        })
}

impl TryFrom<&SavingGoal> for StoredGoal {
    type Error = Error;

    fn try_from(goal: &SavingGoal) -> Result<Self> {
        Ok(Self {
            id: goal.id.clone(),
            title: goal.title.clone(),
            target_amount: decimal_to_number("targetAmount", goal.target_amount)?,
            current_amount: decimal_to_number("currentAmount", goal.current_amount)?,
            emoji: goal.emoji.clone(),
            created_at: to_iso_string(&goal.created_at),
            updated_at: to_iso_string(&goal.updated_at),
        })
    }
}

impl TryFrom<StoredGoal> for SavingGoal {
    type Error = Error;

    fn try_from(stored: StoredGoal) -> Result<Self> {
        if stored.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if stored.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }

        let target_amount = number_to_decimal("targetAmount", &stored.target_amount)?;
        if target_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "targetAmount must be positive, got {}",
                stored.target_amount
            ))
            .into());
        }

        let current_amount = number_to_decimal("currentAmount", &stored.current_amount)?;
        if current_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "currentAmount must not be negative, got {}",
                stored.current_amount
            ))
            .into());
        }

        Ok(Self {
            id: stored.id,
            title: stored.title,
            target_amount,
            current_amount,
            emoji: stored.emoji,
            created_at: parse_iso_string(&stored.created_at)?,
            updated_at: parse_iso_string(&stored.updated_at)?,
        })
    }
}

/// Serializes the full collection, preserving order.
pub fn encode_goals(goals: &[Arc<SavingGoal>]) -> Result<String> {
    let records = goals
        .iter()
        .map(|goal| StoredGoal::try_from(goal.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string(&records)?)
}

/// Parses and validates a persisted collection.
///
/// Any structural or per-field problem rejects the whole value, reported as
/// [`PersistenceError::Malformed`] under `key`.
pub fn decode_goals(key: &str, raw: &str) -> Result<Vec<SavingGoal>> {
    let malformed = |message: String| -> Error {
        PersistenceError::Malformed {
            key: key.to_string(),
            message,
        }
        .into()
    };

    let records: Vec<StoredGoal> =
        serde_json::from_str(raw).map_err(|e| malformed(e.to_string()))?;

    let mut seen_ids = HashSet::with_capacity(records.len());
    let mut goals = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let goal = SavingGoal::try_from(record)
            .map_err(|e| malformed(format!("record {}: {}", index, e)))?;
        if !seen_ids.insert(goal.id.clone()) {
            return Err(malformed(format!(
                "record {}: duplicate id '{}'",
                index, goal.id
            )));
        }
        goals.push(goal);
    }
    Ok(goals)
}
