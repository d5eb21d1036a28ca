//! Validation of raw command-line input before it reaches the goal service.

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use savings_core::constants::DEFAULT_GOAL_EMOJI;
use savings_core::goals::NewSavingGoal;

/// Parses a strictly positive amount. Accepts `,` as the decimal separator.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        bail!("Amount is required");
    }
    let amount = Decimal::from_str(&normalized)
        .with_context(|| format!("'{}' is not a valid amount", raw.trim()))?;
    if amount <= Decimal::ZERO {
        bail!("Amount must be greater than zero");
    }
    Ok(amount)
}

pub fn parse_new_goal(title: &str, target: &str, emoji: Option<&str>) -> Result<NewSavingGoal> {
    let title = title.trim();
    if title.is_empty() {
        bail!("Goal title cannot be empty");
    }
    let target_amount = parse_amount(target).context("Invalid target amount")?;
    let emoji = emoji
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_GOAL_EMOJI);
    Ok(NewSavingGoal::new(title, target_amount, emoji))
}
