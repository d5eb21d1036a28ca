//! Pure transformations of the goal collection.
//!
//! Every function takes the current collection and returns a new one; the
//! input is never modified. Goals that are not touched by an operation are
//! shared with the input (`Arc::ptr_eq` holds for them).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::goals_model::{AmountDirection, NewSavingGoal, SavingGoal};
use crate::errors::Result;

/// Appends a new goal with a zero balance.
///
/// Expects `new_goal` to have passed [`NewSavingGoal::validate`]. The title is
/// stored trimmed.
pub fn create_goal(
    goals: &[Arc<SavingGoal>],
    new_goal: NewSavingGoal,
    id: String,
    now: DateTime<Utc>,
) -> (Vec<Arc<SavingGoal>>, Arc<SavingGoal>) {
    let goal = Arc::new(SavingGoal {
        id,
        title: new_goal.title.trim().to_string(),
        target_amount: new_goal.target_amount,
        current_amount: Decimal::ZERO,
        emoji: new_goal.emoji,
        created_at: now,
        updated_at: now,
    });

    let mut next = Vec::with_capacity(goals.len() + 1);
    next.extend(goals.iter().cloned());
    next.push(Arc::clone(&goal));
    (next, goal)
}

/// Adds to or subtracts from a goal's balance.
///
/// Subtraction clamps at zero. An unknown `goal_id` returns an identical
/// collection and `None`; otherwise the updated goal is returned alongside.
/// A balance that would overflow fails without producing a new collection.
pub fn adjust_amount(
    goals: &[Arc<SavingGoal>],
    goal_id: &str,
    amount: Decimal,
    direction: AmountDirection,
    now: DateTime<Utc>,
) -> Result<(Vec<Arc<SavingGoal>>, Option<Arc<SavingGoal>>)> {
    let Some(index) = goals.iter().position(|goal| goal.id == goal_id) else {
        return Ok((goals.to_vec(), None));
    };

    let current = &goals[index];
    let adjusted = Arc::new(SavingGoal {
        current_amount: direction.apply(current.current_amount, amount)?,
        updated_at: now,
        ..SavingGoal::clone(current)
    });

    let mut next = goals.to_vec();
    next[index] = Arc::clone(&adjusted);
    Ok((next, Some(adjusted)))
}

/// Removes the goal with `goal_id`, returning it if it was present.
pub fn delete_goal(
    goals: &[Arc<SavingGoal>],
    goal_id: &str,
) -> (Vec<Arc<SavingGoal>>, Option<Arc<SavingGoal>>) {
    let removed = goals.iter().find(|goal| goal.id == goal_id).cloned();
    let next = goals
        .iter()
        .filter(|goal| goal.id != goal_id)
        .cloned()
        .collect();
    (next, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn seed() -> Vec<Arc<SavingGoal>> {
        let (goals, _) = create_goal(
            &[],
            NewSavingGoal::new("Coche", dec!(8000), "🚗"),
            "car".to_string(),
            t0(),
        );
        let (goals, _) = create_goal(
            &goals,
            NewSavingGoal::new("Viaje", dec!(1500), "✈️"),
            "trip".to_string(),
            t0(),
        );
        goals
    }

    #[test]
    fn test_create_goal_appends_with_zero_balance() {
        let goals = seed();
        let (next, goal) = create_goal(
            &goals,
            NewSavingGoal::new("  Casa nueva  ", dec!(20000), "🏠"),
            "house".to_string(),
            t0(),
        );

        assert_eq!(goals.len(), 2, "input must not be modified");
        assert_eq!(next.len(), 3);
        assert_eq!(next.last().unwrap().id, "house");
        assert_eq!(goal.title, "Casa nueva");
        assert_eq!(goal.current_amount, Decimal::ZERO);
        assert_eq!(goal.created_at, goal.updated_at);
        assert!(Arc::ptr_eq(&goals[0], &next[0]));
        assert!(Arc::ptr_eq(&goals[1], &next[1]));
    }

    #[test]
    fn test_adjust_amount_add_and_subtract() {
        let goals = seed();
        let later = t0() + Duration::minutes(5);

        let (goals, updated) = adjust_amount(&goals, "car", dec!(50), AmountDirection::Add, later).unwrap();
        let updated = updated.unwrap();
        assert_eq!(updated.current_amount, dec!(50));
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.created_at, t0());

        let (goals, updated) =
            adjust_amount(&goals, "car", dec!(20), AmountDirection::Subtract, later).unwrap();
        assert_eq!(updated.unwrap().current_amount, dec!(30));
        assert_eq!(goals[0].current_amount, dec!(30));
    }

    #[test]
    fn test_adjust_amount_subtract_clamps_at_zero() {
        let goals = seed();
        let (goals, _) = adjust_amount(&goals, "car", dec!(50), AmountDirection::Add, t0()).unwrap();
        let (goals, updated) =
            adjust_amount(&goals, "car", dec!(80), AmountDirection::Subtract, t0()).unwrap();
        assert_eq!(updated.unwrap().current_amount, dec!(0));

        let (_, updated) = adjust_amount(&goals, "car", dec!(1), AmountDirection::Subtract, t0()).unwrap();
        assert_eq!(updated.unwrap().current_amount, dec!(0));
    }

    #[test]
    fn test_adjust_amount_may_exceed_target() {
        let goals = seed();
        let (_, updated) = adjust_amount(&goals, "trip", dec!(2000), AmountDirection::Add, t0()).unwrap();
        let updated = updated.unwrap();
        assert_eq!(updated.current_amount, dec!(2000));
        assert_eq!(updated.progress_percentage(), dec!(100));
        assert_eq!(updated.remaining_amount(), dec!(0));
    }

    #[test]
    fn test_adjust_amount_leaves_other_goals_shared() {
        let goals = seed();
        let (next, _) = adjust_amount(&goals, "trip", dec!(10), AmountDirection::Add, t0()).unwrap();
        assert!(Arc::ptr_eq(&goals[0], &next[0]));
        assert!(!Arc::ptr_eq(&goals[1], &next[1]));
        assert_eq!(goals[1].current_amount, dec!(0), "input must not be modified");
    }

    #[test]
    fn test_adjust_amount_unknown_id_is_noop() {
        let goals = seed();
        let (next, updated) = adjust_amount(&goals, "nope", dec!(10), AmountDirection::Add, t0()).unwrap();
        assert!(updated.is_none());
        assert_eq!(next, goals);
        assert!(next.iter().zip(&goals).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn test_adjust_amount_overflow_is_an_error() {
        let goals = seed();
        let (goals, _) = adjust_amount(
            &goals,
            "car",
            crate::constants::MAX_AMOUNT,
            AmountDirection::Add,
            t0(),
        )
        .unwrap();

        let result = adjust_amount(&goals, "car", Decimal::MAX, AmountDirection::Add, t0());
        assert!(result.is_err());
        assert_eq!(goals[0].current_amount, crate::constants::MAX_AMOUNT);
    }

    #[test]
    fn test_delete_goal_removes_match() {
        let goals = seed();
        let (next, removed) = delete_goal(&goals, "car");
        assert_eq!(removed.unwrap().id, "car");
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, "trip");
        assert_eq!(goals.len(), 2, "input must not be modified");
    }

    #[test]
    fn test_delete_goal_unknown_id_keeps_order() {
        let goals = seed();
        let (next, removed) = delete_goal(&goals, "nope");
        assert!(removed.is_none());
        assert_eq!(next, goals);
        assert_eq!(
            next.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
            vec!["car", "trip"]
        );
    }
}
