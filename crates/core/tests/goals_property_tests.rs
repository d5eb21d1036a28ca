//! Property-based integration tests for goal operations.
//!
//! These tests verify that the goal invariants hold across random inputs,
//! using the `proptest` crate for test case generation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use savings_core::constants::MAX_AMOUNT;
use savings_core::goals::{
    adjust_amount, create_goal, decode_goals, delete_goal, encode_goals, overall_progress,
    progress_percentage, remaining_amount, total_saved, validate_adjustment_amount,
    AmountDirection, NewSavingGoal, SavingGoal,
};
use std::collections::HashSet;
use std::sync::Arc;

// =============================================================================
// Generators
// =============================================================================

/// Generates a positive amount with cent precision (0.01 ..= 1_000_000.00).
fn arb_cents() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates any amount the service accepts: up to [`MAX_AMOUNT`], with up
/// to fifteen significant digits, including the bounds themselves.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        4 => arb_cents(),
        4 => (1i64..=999_999_999_999_999, 0u32..=15)
            .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
            .prop_filter("within the accepted range", |amount| *amount <= MAX_AMOUNT),
        1 => Just(MAX_AMOUNT),
        1 => Just(Decimal::new(1, 15)),
    ]
}

/// Any decimal at all, including values no validation would let through.
fn arb_any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
}

fn arb_direction() -> impl Strategy<Value = AmountDirection> {
    prop_oneof![Just(AmountDirection::Add), Just(AmountDirection::Subtract)]
}

fn arb_new_goal() -> impl Strategy<Value = NewSavingGoal> {
    ("[A-Za-z][A-Za-z ]{0,30}", arb_amount(), "[🏠🚗🎯💰]")
        .prop_map(|(title, target, emoji)| NewSavingGoal::new(title, target, emoji))
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Builds a collection by creating every goal in order, then applying each
/// adjustment to the goal at `index % len`.
fn build_collection(
    new_goals: Vec<NewSavingGoal>,
    adjustments: Vec<(usize, Decimal, AmountDirection)>,
) -> Vec<Arc<SavingGoal>> {
    let mut goals: Vec<Arc<SavingGoal>> = Vec::new();
    for (i, new_goal) in new_goals.into_iter().enumerate() {
        let now = base_time() + Duration::seconds(i as i64);
        goals = create_goal(&goals, new_goal, format!("goal-{}", i), now).0;
    }
    if goals.is_empty() {
        return goals;
    }
    for (step, (index, amount, direction)) in adjustments.into_iter().enumerate() {
        let id = goals[index % goals.len()].id.clone();
        let now = base_time() + Duration::minutes(step as i64 + 1);
        // Adjustments that would overflow the balance are rejected and skipped.
        if let Ok((next, _)) = adjust_amount(&goals, &id, amount, direction, now) {
            goals = next;
        }
    }
    goals
}

fn arb_collection() -> impl Strategy<Value = Vec<Arc<SavingGoal>>> {
    (
        proptest::collection::vec(arb_new_goal(), 0..8),
        proptest::collection::vec((0usize..8, arb_amount(), arb_direction()), 0..20),
    )
        .prop_map(|(new_goals, adjustments)| build_collection(new_goals, adjustments))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Created goals start empty, with equal timestamps and an id never seen before.
    #[test]
    fn prop_create_goal_starts_empty_with_unique_id(new_goals in proptest::collection::vec(arb_new_goal(), 1..10)) {
        let mut goals: Vec<Arc<SavingGoal>> = Vec::new();
        let mut seen = HashSet::new();
        for (i, new_goal) in new_goals.into_iter().enumerate() {
            let (next, goal) = create_goal(&goals, new_goal, format!("goal-{}", i), base_time());
            prop_assert_eq!(goal.current_amount, Decimal::ZERO);
            prop_assert_eq!(goal.created_at, goal.updated_at);
            prop_assert!(seen.insert(goal.id.clone()));
            prop_assert_eq!(next.len(), goals.len() + 1);
            goals = next;
        }
    }

    /// No sequence of adjustments drives a balance below zero.
    #[test]
    fn prop_balance_never_negative(goals in arb_collection()) {
        for goal in &goals {
            prop_assert!(goal.current_amount >= Decimal::ZERO);
        }
    }

    /// Adding then subtracting the same amount restores the balance.
    #[test]
    fn prop_add_then_subtract_round_trips(goals in arb_collection(), amount in arb_cents()) {
        prop_assume!(!goals.is_empty());
        let goal = goals[0].clone();

        let added = adjust_amount(&goals, &goal.id, amount, AmountDirection::Add, base_time());
        prop_assume!(added.is_ok());
        let (after_add, _) = added.unwrap();
        let (after_sub, updated) =
            adjust_amount(&after_add, &goal.id, amount, AmountDirection::Subtract, base_time()).unwrap();

        prop_assert_eq!(updated.unwrap().current_amount, goal.current_amount);
        prop_assert_eq!(after_sub.len(), goals.len());
    }

    /// Subtracting more than the balance lands exactly on zero.
    #[test]
    fn prop_over_subtraction_clamps_to_zero(goals in arb_collection(), extra in arb_amount()) {
        prop_assume!(!goals.is_empty());
        let goal = goals[0].clone();
        let amount = goal.current_amount + extra;

        let (_, updated) =
            adjust_amount(&goals, &goal.id, amount, AmountDirection::Subtract, base_time()).unwrap();
        prop_assert_eq!(updated.unwrap().current_amount, Decimal::ZERO);
    }

    /// Progress stays within [0, 100] and the remaining amount is never negative.
    #[test]
    fn prop_progress_bounded(goals in arb_collection()) {
        for goal in &goals {
            let pct = progress_percentage(goal);
            prop_assert!(pct >= Decimal::ZERO && pct <= Decimal::ONE_HUNDRED);
            prop_assert!(remaining_amount(goal) >= Decimal::ZERO);
        }
        prop_assert!(overall_progress(&goals) >= Decimal::ZERO);
    }

    /// Deleting an unknown id returns the same goals in the same order.
    #[test]
    fn prop_delete_unknown_id_is_identity(goals in arb_collection()) {
        let (next, removed) = delete_goal(&goals, "not-a-goal");
        prop_assert!(removed.is_none());
        prop_assert_eq!(next, goals);
    }

    /// Deleting a known id removes exactly that goal.
    #[test]
    fn prop_delete_removes_only_target(goals in arb_collection(), pick in 0usize..8) {
        prop_assume!(!goals.is_empty());
        let victim = goals[pick % goals.len()].id.clone();
        let (next, removed) = delete_goal(&goals, &victim);
        let removed = removed.unwrap();
        prop_assert_eq!(removed.id.as_str(), victim.as_str());
        prop_assert_eq!(next.len(), goals.len() - 1);
        prop_assert!(next.iter().all(|g| g.id != victim));
    }

    /// Balances stay within the accepted range whatever is added.
    #[test]
    fn prop_balance_never_exceeds_max(goals in arb_collection()) {
        for goal in &goals {
            prop_assert!(goal.current_amount <= MAX_AMOUNT);
        }
        prop_assert!(total_saved(&goals) >= Decimal::ZERO);
    }

    /// Arbitrary decimals, however large or precise, never make an adjustment panic.
    #[test]
    fn prop_any_amount_is_rejected_or_applied(
        goals in arb_collection(),
        amount in arb_any_decimal(),
        direction in arb_direction(),
    ) {
        prop_assume!(!goals.is_empty());
        let goal = goals[0].clone();

        if let Ok((next, updated)) = adjust_amount(&goals, &goal.id, amount, direction, base_time()) {
            prop_assert_eq!(next.len(), goals.len());
            if amount > Decimal::ZERO {
                let balance = updated.unwrap().current_amount;
                prop_assert!(balance >= Decimal::ZERO && balance <= MAX_AMOUNT);
            }
        }
        if validate_adjustment_amount(amount).is_ok() {
            prop_assert!(amount > Decimal::ZERO && amount <= MAX_AMOUNT);
        }
    }

    /// Encoding then decoding yields a deep-equal collection.
    #[test]
    fn prop_persistence_round_trip(goals in arb_collection()) {
        let raw = encode_goals(&goals).unwrap();
        let decoded: Vec<Arc<SavingGoal>> = decode_goals("savingGoals", &raw)
            .unwrap()
            .into_iter()
            .map(Arc::new)
            .collect();
        prop_assert_eq!(decoded, goals);
    }
}

#[test]
fn test_overall_progress_of_empty_collection_is_zero() {
    assert_eq!(overall_progress(&[]), Decimal::ZERO);
}

#[test]
fn test_extreme_amounts_survive_persistence() {
    let goals = build_collection(
        vec![
            NewSavingGoal::new("Isla", MAX_AMOUNT, "🏝️"),
            NewSavingGoal::new("Céntimos", Decimal::new(1, 15), "🪙"),
        ],
        vec![
            (0, MAX_AMOUNT, AmountDirection::Add),
            (0, Decimal::new(1, 2), AmountDirection::Add),
            (1, Decimal::new(123_456_789_012_345, 15), AmountDirection::Add),
        ],
    );
    assert_eq!(goals[0].current_amount, MAX_AMOUNT);
    assert_eq!(goals[1].current_amount, Decimal::new(123_456_789_012_345, 15));

    let raw = encode_goals(&goals).unwrap();
    let decoded = decode_goals("savingGoals", &raw).unwrap();
    assert_eq!(decoded[0].target_amount, MAX_AMOUNT);
    assert_eq!(decoded[0].current_amount, MAX_AMOUNT);
    assert_eq!(decoded[1].current_amount, Decimal::new(123_456_789_012_345, 15));
}
