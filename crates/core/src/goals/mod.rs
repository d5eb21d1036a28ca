//! Goals module - domain models, pure operations, persistence and services.

mod goals_model;
mod goals_operations;
mod goals_progress;
mod goals_service;
mod goals_store;
mod goals_traits;

pub(crate) mod goals_codec;

pub use goals_codec::{decode_goals, encode_goals, StoredGoal};
pub use goals_model::{validate_adjustment_amount, AmountDirection, NewSavingGoal, SavingGoal};
pub use goals_operations::{adjust_amount, create_goal, delete_goal};
pub use goals_progress::{
    overall_progress, progress_percentage, remaining_amount, total_saved, total_target,
    GoalsSummary,
};
pub use goals_service::GoalService;
pub use goals_store::GoalStore;
pub use goals_traits::GoalServiceTrait;
