use rust_decimal::Decimal;

/// Storage key holding the serialized goal collection
pub const GOALS_STORAGE_KEY: &str = "savingGoals";

/// Storage key holding the serialized transaction log
pub const TRANSACTIONS_STORAGE_KEY: &str = "savingTransactions";

/// Largest target, adjustment or balance a goal accepts (one trillion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Decimal precision for displaying money amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for displaying progress percentages
pub const PROGRESS_DECIMAL_PRECISION: u32 = 1;

/// Emoji preselected when the user does not pick one
pub const DEFAULT_GOAL_EMOJI: &str = "🎯";

/// Emoji offered by the goal creation form.
///
/// Membership is a presentation concern; the core accepts any string.
pub const GOAL_EMOJI_OPTIONS: [&str; 24] = [
    "🏠", "🚗", "✈️", "🎓", "💍", "🏖️", "📱", "💻", "🎯", "💰", "🎉", "🎁", "🌟", "🔥", "💎", "🚀",
    "🏆", "🎪", "🎨", "🎭", "🎲", "🎸", "🎺", "⚽",
];
