use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::Result;
use crate::goals::goals_model::{AmountDirection, NewSavingGoal, SavingGoal};
use crate::goals::goals_progress::GoalsSummary;
use crate::transactions::Transaction;

/// Trait for goal service operations
///
/// Commands persist the whole collection after every change. Unknown goal
/// ids are not errors: `adjust_amount` and `delete_goal` return `None`.
pub trait GoalServiceTrait: Send + Sync {
    fn load_goals(&self) -> Vec<Arc<SavingGoal>>;
    fn get_goals(&self) -> Vec<Arc<SavingGoal>>;
    fn get_goal(&self, goal_id: &str) -> Option<Arc<SavingGoal>>;
    fn get_summary(&self) -> GoalsSummary;
    fn get_transactions(&self, goal_id: &str) -> Vec<Transaction>;
    fn create_goal(&self, new_goal: NewSavingGoal) -> Result<Arc<SavingGoal>>;
    fn adjust_amount(
        &self,
        goal_id: &str,
        amount: Decimal,
        direction: AmountDirection,
    ) -> Result<Option<Arc<SavingGoal>>>;
    fn delete_goal(&self, goal_id: &str) -> Result<Option<Arc<SavingGoal>>>;
}
