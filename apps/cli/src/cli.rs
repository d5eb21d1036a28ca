use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "savings")]
#[command(about = "Track progress toward savings goals")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
    /// Directory holding the savings database (overrides SAVINGS_DATA_DIR)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands. Without one, goals are listed.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every goal with its progress
    List,
    /// Create a new goal
    Create {
        /// Goal title
        title: String,
        /// Target amount in euros (e.g. 1500 or 1500.50)
        target: String,
        /// Emoji shown next to the goal
        #[arg(long, short = 'e')]
        emoji: Option<String>,
    },
    /// Add money to a goal
    Add {
        /// Goal id
        goal_id: String,
        /// Amount in euros
        amount: String,
    },
    /// Withdraw money from a goal (never below zero)
    Subtract {
        /// Goal id
        goal_id: String,
        /// Amount in euros
        amount: String,
    },
    /// Delete a goal and its history
    Delete {
        /// Goal id
        goal_id: String,
    },
    /// Show totals across all goals
    Summary,
    /// Show the adjustments recorded for a goal
    History {
        /// Goal id
        goal_id: String,
    },
    /// List the emoji offered for new goals
    Emojis,
}
