use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::goals_model::{validate_adjustment_amount, AmountDirection, NewSavingGoal, SavingGoal};
use super::goals_operations;
use super::goals_progress::GoalsSummary;
use super::goals_store::GoalStore;
use super::goals_traits::GoalServiceTrait;
use crate::constants::{GOALS_STORAGE_KEY, TRANSACTIONS_STORAGE_KEY};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::storage::KeyValueSlot;
use crate::transactions::{Transaction, TransactionLog};
use crate::utils::{Clock, IdGenerator, SystemClock, UuidGenerator};

/// Service owning the goal collection and its audit trail.
pub struct GoalService {
    store: GoalStore,
    transactions: TransactionLog,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    event_sink: Arc<dyn DomainEventSink>,
    // Serializes read-modify-write commands.
    commands: Mutex<()>,
}

impl GoalService {
    pub fn new(slot: Arc<dyn KeyValueSlot>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self::with_environment(
            slot,
            event_sink,
            Arc::new(SystemClock),
            Arc::new(UuidGenerator),
        )
    }

    pub fn with_environment(
        slot: Arc<dyn KeyValueSlot>,
        event_sink: Arc<dyn DomainEventSink>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        GoalService {
            store: GoalStore::new(Arc::clone(&slot)),
            transactions: TransactionLog::new(slot),
            clock,
            ids,
            event_sink,
            commands: Mutex::new(()),
        }
    }

    /// Whether in-memory goals are ahead of the persistent slot.
    pub fn has_unsaved_changes(&self) -> bool {
        self.store.is_dirty()
    }

    /// Retries persisting the current collection.
    pub fn flush(&self) -> Result<()> {
        let _guard = self.lock_commands();
        let result = self.store.flush();
        self.report(&result, GOALS_STORAGE_KEY);
        result
    }

    fn lock_commands(&self) -> MutexGuard<'_, ()> {
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn report<T>(&self, result: &Result<T>, key: &str) {
        if let Err(e) = result {
            warn!("Changes kept in memory only, '{}' was not saved: {}", key, e);
            self.event_sink
                .emit(DomainEvent::persistence_failed(key.to_string(), e.to_string()));
        }
    }
}

impl GoalServiceTrait for GoalService {
    fn load_goals(&self) -> Vec<Arc<SavingGoal>> {
        let _guard = self.lock_commands();
        let goals = self.store.load();
        self.transactions.load();
        self.event_sink.emit(DomainEvent::goals_loaded(goals.len()));
        goals
    }

    fn get_goals(&self) -> Vec<Arc<SavingGoal>> {
        self.store.goals()
    }

    fn get_goal(&self, goal_id: &str) -> Option<Arc<SavingGoal>> {
        self.store.get(goal_id)
    }

    fn get_summary(&self) -> GoalsSummary {
        GoalsSummary::from_goals(&self.store.goals())
    }

    fn get_transactions(&self, goal_id: &str) -> Vec<Transaction> {
        self.transactions.for_goal(goal_id)
    }

    fn create_goal(&self, new_goal: NewSavingGoal) -> Result<Arc<SavingGoal>> {
        new_goal.validate()?;
        let _guard = self.lock_commands();

        let (goals, goal) = goals_operations::create_goal(
            &self.store.goals(),
            new_goal,
            self.ids.generate(),
            self.clock.now(),
        );
        let saved = self.store.save(goals);

        info!("Created saving goal '{}' ({})", goal.title, goal.id);
        self.event_sink
            .emit(DomainEvent::goal_created(goal.id.clone(), goal.title.clone()));
        self.report(&saved, GOALS_STORAGE_KEY);
        saved?;
        Ok(goal)
    }

    fn adjust_amount(
        &self,
        goal_id: &str,
        amount: Decimal,
        direction: AmountDirection,
    ) -> Result<Option<Arc<SavingGoal>>> {
        validate_adjustment_amount(amount)?;
        let _guard = self.lock_commands();

        let now = self.clock.now();
        let (goals, updated) =
            goals_operations::adjust_amount(&self.store.goals(), goal_id, amount, direction, now)
                .inspect_err(|e| warn!("Cannot {} {} on goal {}: {}", direction, amount, goal_id, e))?;
        let Some(goal) = updated else {
            debug!("No saving goal with id {}, nothing to {}", goal_id, direction);
            return Ok(None);
        };

        let goals_saved = self.store.save(goals);
        let logged = self.transactions.append(Transaction {
            id: self.ids.generate(),
            goal_id: goal.id.clone(),
            amount,
            direction,
            date: now,
            description: None,
        });

        info!(
            "{} {} on goal '{}', balance now {}",
            direction, amount, goal.title, goal.current_amount
        );
        self.event_sink.emit(DomainEvent::goal_amount_adjusted(
            goal.id.clone(),
            direction,
            amount,
            goal.current_amount,
        ));
        self.report(&goals_saved, GOALS_STORAGE_KEY);
        self.report(&logged, TRANSACTIONS_STORAGE_KEY);
        goals_saved.and(logged)?;
        Ok(Some(goal))
    }

    fn delete_goal(&self, goal_id: &str) -> Result<Option<Arc<SavingGoal>>> {
        let _guard = self.lock_commands();

        let (goals, removed) = goals_operations::delete_goal(&self.store.goals(), goal_id);
        let Some(goal) = removed else {
            debug!("No saving goal with id {}, nothing to delete", goal_id);
            return Ok(None);
        };

        let goals_saved = self.store.save(goals);
        let purged = self.transactions.remove_for_goal(goal_id);

        info!("Deleted saving goal '{}' ({})", goal.title, goal.id);
        self.event_sink
            .emit(DomainEvent::goal_deleted(goal.id.clone(), goal.title.clone()));
        self.report(&goals_saved, GOALS_STORAGE_KEY);
        self.report(&purged, TRANSACTIONS_STORAGE_KEY);
        goals_saved.and(purged.map(|_| ()))?;
        Ok(Some(goal))
    }
}
