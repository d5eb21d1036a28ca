use log::{debug, error, info};
use std::sync::{Arc, PoisonError, RwLock};

use super::goals_codec::{decode_goals, encode_goals};
use super::goals_model::SavingGoal;
use crate::constants::GOALS_STORAGE_KEY;
use crate::errors::Result;
use crate::storage::KeyValueSlot;

#[derive(Default)]
struct StoreState {
    goals: Vec<Arc<SavingGoal>>,
    /// In-memory state is ahead of the slot (last write failed).
    dirty: bool,
}

/// Authoritative in-memory goal collection, mirrored into a persistent slot.
pub struct GoalStore {
    slot: Arc<dyn KeyValueSlot>,
    key: String,
    state: RwLock<StoreState>,
}

impl GoalStore {
    pub fn new(slot: Arc<dyn KeyValueSlot>) -> Self {
        Self::with_key(slot, GOALS_STORAGE_KEY)
    }

    pub fn with_key(slot: Arc<dyn KeyValueSlot>, key: &str) -> Self {
        GoalStore {
            slot,
            key: key.to_string(),
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Reads and validates the persisted collection without touching memory.
    ///
    /// `Ok(None)` means nothing has been stored yet.
    pub fn read_persisted(&self) -> Result<Option<Vec<SavingGoal>>> {
        match self.slot.get_item(&self.key)? {
            Some(raw) => decode_goals(&self.key, &raw).map(Some),
            None => Ok(None),
        }
    }

    /// Loads the persisted collection into memory and returns it.
    ///
    /// An absent value yields an empty collection. A read or decode failure is
    /// logged and the last known in-memory collection is kept.
    pub fn load(&self) -> Vec<Arc<SavingGoal>> {
        match self.read_persisted() {
            Ok(Some(goals)) => {
                info!("Loaded {} saving goals from '{}'", goals.len(), self.key);
                let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                state.goals = goals.into_iter().map(Arc::new).collect();
                state.dirty = false;
                state.goals.clone()
            }
            Ok(None) => {
                debug!("No saving goals stored under '{}'", self.key);
                let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                state.goals.clear();
                state.dirty = false;
                Vec::new()
            }
            Err(e) => {
                error!("Error loading goals: {}", e);
                self.goals()
            }
        }
    }

    /// Replaces the in-memory collection and writes it to the slot.
    ///
    /// The in-memory collection is replaced even when the write fails; the
    /// store is then marked dirty and the error is returned.
    pub fn save(&self, goals: Vec<Arc<SavingGoal>>) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.goals = goals;
        let result = self.write(&state.goals);
        state.dirty = result.is_err();
        result
    }

    /// Rewrites the current in-memory collection, e.g. after a failed save.
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let result = self.write(&state.goals);
        state.dirty = result.is_err();
        result
    }

    fn write(&self, goals: &[Arc<SavingGoal>]) -> Result<()> {
        let result = encode_goals(goals).and_then(|raw| self.slot.set_item(&self.key, &raw));
        match &result {
            Ok(()) => debug!("Saved {} saving goals to '{}'", goals.len(), self.key),
            Err(e) => error!("Error saving goals: {}", e),
        }
        result
    }

    /// Snapshot of the current collection in insertion order.
    pub fn goals(&self) -> Vec<Arc<SavingGoal>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .goals
            .clone()
    }

    pub fn get(&self, goal_id: &str) -> Option<Arc<SavingGoal>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .goals
            .iter()
            .find(|goal| goal.id == goal_id)
            .cloned()
    }

    pub fn is_dirty(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .dirty
    }
}
