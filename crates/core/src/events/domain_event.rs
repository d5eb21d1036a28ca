//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::AmountDirection;

/// Domain events emitted by the goal service after state changes.
///
/// These are the notification channel for the presentation layer: a UI
/// re-reads the goals it shows when it receives one of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// The collection was (re)loaded from the persistent slot.
    GoalsLoaded { goal_count: usize },

    /// A new goal was appended.
    GoalCreated { goal_id: String, title: String },

    /// A goal's balance was changed.
    GoalAmountAdjusted {
        goal_id: String,
        direction: AmountDirection,
        /// Requested amount (before clamping)
        amount: Decimal,
        current_amount: Decimal,
    },

    /// A goal was permanently removed.
    GoalDeleted { goal_id: String, title: String },

    /// Writing to the persistent slot failed; in-memory state is ahead of storage.
    PersistenceFailed { key: String, message: String },
}

impl DomainEvent {
    /// Creates a GoalsLoaded event.
    pub fn goals_loaded(goal_count: usize) -> Self {
        Self::GoalsLoaded { goal_count }
    }

    /// Creates a GoalCreated event.
    pub fn goal_created(goal_id: String, title: String) -> Self {
        Self::GoalCreated { goal_id, title }
    }

    /// Creates a GoalAmountAdjusted event.
    pub fn goal_amount_adjusted(
        goal_id: String,
        direction: AmountDirection,
        amount: Decimal,
        current_amount: Decimal,
    ) -> Self {
        Self::GoalAmountAdjusted {
            goal_id,
            direction,
            amount,
            current_amount,
        }
    }

    /// Creates a GoalDeleted event.
    pub fn goal_deleted(goal_id: String, title: String) -> Self {
        Self::GoalDeleted { goal_id, title }
    }

    /// Creates a PersistenceFailed event.
    pub fn persistence_failed(key: String, message: String) -> Self {
        Self::PersistenceFailed { key, message }
    }
}
