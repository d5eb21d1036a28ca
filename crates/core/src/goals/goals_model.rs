//! Goals domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{goals_codec, goals_progress};
use crate::constants::MAX_AMOUNT;
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoal {
    pub id: String,
    pub title: String,
    pub target_amount: Decimal,
    /// Never negative; may exceed `target_amount`.
    pub current_amount: Decimal,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavingGoal {
    /// Completion percentage clamped to `[0, 100]`.
    pub fn progress_percentage(&self) -> Decimal {
        goals_progress::progress_percentage(self)
    }

    /// Amount still missing to reach the target, never negative.
    pub fn remaining_amount(&self) -> Decimal {
        goals_progress::remaining_amount(self)
    }

    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingGoal {
    pub title: String,
    pub target_amount: Decimal,
    pub emoji: String,
}

impl NewSavingGoal {
    pub fn new(title: impl Into<String>, target_amount: Decimal, emoji: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target_amount,
            emoji: emoji.into(),
        }
    }

    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal title cannot be empty".to_string(),
            )));
        }
        validate_amount("Target amount", self.target_amount)
    }
}

/// Checks that an amount used to adjust a goal is positive and storable.
pub fn validate_adjustment_amount(amount: Decimal) -> Result<()> {
    validate_amount("Amount", amount)
}

fn validate_amount(field: &str, amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(invalid(format!(
            "{} must be greater than zero, got {}",
            field, amount
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(invalid(format!(
            "{} must not exceed {}, got {}",
            field, MAX_AMOUNT, amount
        )));
    }
    ensure_storable(field, amount)
}

/// Amounts are persisted as JSON numbers; reject any that would not read back unchanged.
fn ensure_storable(field: &str, amount: Decimal) -> Result<()> {
    if !goals_codec::is_exactly_storable(amount) {
        return Err(invalid(format!(
            "{} {} has more significant digits than can be stored",
            field, amount
        )));
    }
    Ok(())
}

fn invalid(message: String) -> Error {
    Error::Validation(ValidationError::InvalidInput(message))
}

/// Whether money is added to or withdrawn from a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountDirection {
    Add,
    Subtract,
}

impl AmountDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmountDirection::Add => "add",
            AmountDirection::Subtract => "subtract",
        }
    }

    /// Applies the movement to a balance. Subtraction floors at zero.
    ///
    /// Fails when the new balance would exceed [`MAX_AMOUNT`] or could not be
    /// stored exactly; the balance is then left as it was.
    pub fn apply(&self, current: Decimal, amount: Decimal) -> Result<Decimal> {
        let balance = match self {
            AmountDirection::Add => current
                .checked_add(amount)
                .filter(|balance| *balance <= MAX_AMOUNT)
                .ok_or_else(|| {
                    invalid(format!(
                        "Balance {} + {} would exceed the maximum of {}",
                        current, amount, MAX_AMOUNT
                    ))
                })?,
            AmountDirection::Subtract => current
                .checked_sub(amount)
                .unwrap_or(Decimal::ZERO)
                .max(Decimal::ZERO),
        };
        ensure_storable("Balance", balance)?;
        Ok(balance)
    }
}

impl fmt::Display for AmountDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_goal_validation() {
        assert!(NewSavingGoal::new("Casa nueva", dec!(20000), "🏠")
            .validate()
            .is_ok());
        assert!(NewSavingGoal::new("   ", dec!(100), "🏠").validate().is_err());
        assert!(NewSavingGoal::new("", dec!(100), "🏠").validate().is_err());
        assert!(NewSavingGoal::new("Coche", dec!(0), "🚗").validate().is_err());
        assert!(NewSavingGoal::new("Coche", dec!(-5), "🚗").validate().is_err());
    }

    #[test]
    fn test_new_goal_target_is_bounded() {
        assert!(NewSavingGoal::new("Isla", MAX_AMOUNT, "🏖️").validate().is_ok());
        assert!(NewSavingGoal::new("Isla", MAX_AMOUNT + dec!(0.01), "🏖️")
            .validate()
            .is_err());
        assert!(NewSavingGoal::new("Isla", Decimal::MAX, "🏖️")
            .validate()
            .is_err());
    }

    #[test]
    fn test_adjustment_amount_must_be_positive() {
        assert!(validate_adjustment_amount(dec!(0.01)).is_ok());
        assert!(validate_adjustment_amount(dec!(0)).is_err());
        assert!(validate_adjustment_amount(dec!(-1)).is_err());
    }

    #[test]
    fn test_adjustment_amount_must_be_storable() {
        assert!(validate_adjustment_amount(dec!(123456.123456789)).is_ok());
        assert!(validate_adjustment_amount(dec!(123456.123456789012345)).is_err());
        assert!(validate_adjustment_amount(Decimal::MAX).is_err());
    }

    #[test]
    fn test_direction_apply_clamps_subtraction() {
        assert_eq!(AmountDirection::Add.apply(dec!(50), dec!(80)).unwrap(), dec!(130));
        assert_eq!(AmountDirection::Subtract.apply(dec!(50), dec!(80)).unwrap(), dec!(0));
        assert_eq!(AmountDirection::Subtract.apply(dec!(50), dec!(20)).unwrap(), dec!(30));
    }

    #[test]
    fn test_direction_apply_rejects_overflowing_balance() {
        assert!(AmountDirection::Add.apply(MAX_AMOUNT, dec!(0.01)).is_err());
        assert!(AmountDirection::Add.apply(Decimal::MAX, Decimal::MAX).is_err());
        assert_eq!(AmountDirection::Add.apply(MAX_AMOUNT - dec!(1), dec!(1)).unwrap(), MAX_AMOUNT);
        assert_eq!(
            AmountDirection::Subtract.apply(Decimal::ZERO, Decimal::MAX).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_direction_apply_rejects_unstorable_balance() {
        // 16 significant digits do not survive the JSON number round trip
        assert!(AmountDirection::Add
            .apply(dec!(100000000000), dec!(0.00001))
            .is_err());
    }

    #[test]
    fn test_direction_serialization() {
        assert_eq!(
            serde_json::to_string(&AmountDirection::Add).unwrap(),
            "\"add\""
        );
        assert_eq!(
            serde_json::from_str::<AmountDirection>("\"subtract\"").unwrap(),
            AmountDirection::Subtract
        );
    }
}
