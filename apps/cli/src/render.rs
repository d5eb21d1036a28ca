//! Plain-text rendering of goals, totals and history.
//!
//! Money uses Spanish formatting (`12.345,67 €`): `.` groups thousands once the
//! integer part reaches five digits and `,` separates the cents.

use rust_decimal::{Decimal, RoundingStrategy};

use savings_core::constants::{DISPLAY_DECIMAL_PRECISION, PROGRESS_DECIMAL_PRECISION};
use savings_core::goals::{AmountDirection, GoalsSummary, SavingGoal};
use savings_core::transactions::Transaction;

fn fixed(value: Decimal, precision: u32) -> String {
    let mut rounded =
        value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    rounded.to_string()
}

fn group_thousands(digits: &str) -> String {
    if digits.len() < 5 {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_eur(amount: Decimal) -> String {
    let text = fixed(amount, DISPLAY_DECIMAL_PRECISION);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{}{},{} €", sign, group_thousands(int_part), frac_part)
}

pub fn format_progress(percentage: Decimal) -> String {
    format!("{}%", fixed(percentage, PROGRESS_DECIMAL_PRECISION))
}

pub fn render_goal(goal: &SavingGoal) -> String {
    let mut line = format!(
        "{} {}  {} / {}  {}",
        goal.emoji,
        goal.title,
        format_eur(goal.current_amount),
        format_eur(goal.target_amount),
        format_progress(goal.progress_percentage()),
    );
    if goal.is_achieved() {
        line.push_str("  ¡Meta alcanzada!");
    } else {
        line.push_str(&format!("  faltan {}", format_eur(goal.remaining_amount())));
    }
    line.push_str(&format!("  [{}]", goal.id));
    line
}

pub fn render_summary(summary: &GoalsSummary) -> String {
    format!(
        "Total ahorrado: {} de {}\nMetas: {} ({} alcanzadas)\nProgreso general: {} completado",
        format_eur(summary.total_saved),
        format_eur(summary.total_target),
        summary.goal_count,
        summary.achieved_count,
        format_progress(summary.overall_progress_capped()),
    )
}

pub fn render_transaction(transaction: &Transaction) -> String {
    let sign = match transaction.direction {
        AmountDirection::Add => '+',
        AmountDirection::Subtract => '-',
    };
    let mut line = format!(
        "{}  {}{}",
        transaction.date.format("%d/%m/%Y %H:%M"),
        sign,
        format_eur(transaction.amount)
    );
    if let Some(description) = &transaction.description {
        line.push_str("  ");
        line.push_str(description);
    }
    line
}
