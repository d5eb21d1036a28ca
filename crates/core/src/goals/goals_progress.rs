//! Derived progress values. Recomputed on demand, never stored.

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use super::goals_model::SavingGoal;

/// Ratio of `part` to `whole` as a percentage, or `None` when `whole` is not positive.
fn percentage_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole <= Decimal::ZERO {
        return None;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

/// `min(current / target * 100, 100)`.
///
/// Goals always have a positive target; a non-positive one yields 0.
pub fn progress_percentage(goal: &SavingGoal) -> Decimal {
    if goal.target_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    percentage_of(goal.current_amount, goal.target_amount)
        .map_or(Decimal::ONE_HUNDRED, |pct| pct.min(Decimal::ONE_HUNDRED))
        .max(Decimal::ZERO)
}

/// `max(target - current, 0)`.
pub fn remaining_amount(goal: &SavingGoal) -> Decimal {
    (goal.target_amount - goal.current_amount).max(Decimal::ZERO)
}

/// Saturates at `Decimal::MAX` rather than overflowing.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

pub fn total_saved(goals: &[Arc<SavingGoal>]) -> Decimal {
    saturating_sum(goals.iter().map(|goal| goal.current_amount))
}

pub fn total_target(goals: &[Arc<SavingGoal>]) -> Decimal {
    saturating_sum(goals.iter().map(|goal| goal.target_amount))
}

/// `total_saved / total_target * 100`, or 0 when there is nothing to divide by.
///
/// Not clamped: a collection that overshot its targets reports more than 100.
pub fn overall_progress(goals: &[Arc<SavingGoal>]) -> Decimal {
    percentage_of(total_saved(goals), total_target(goals)).unwrap_or(Decimal::ZERO)
}

/// Aggregate figures shown above the goal list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsSummary {
    pub goal_count: usize,
    pub achieved_count: usize,
    pub total_saved: Decimal,
    pub total_target: Decimal,
    pub overall_progress: Decimal,
}

impl GoalsSummary {
    pub fn from_goals(goals: &[Arc<SavingGoal>]) -> Self {
        Self {
            goal_count: goals.len(),
            achieved_count: goals.iter().filter(|goal| goal.is_achieved()).count(),
            total_saved: total_saved(goals),
            total_target: total_target(goals),
            overall_progress: overall_progress(goals),
        }
    }

    /// Overall progress clamped to 100 for progress bars.
    pub fn overall_progress_capped(&self) -> Decimal {
        self.overall_progress.min(Decimal::ONE_HUNDRED)
    }
}
