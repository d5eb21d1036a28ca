mod cli;
mod config;
mod domain_events;
mod input;
mod main_lib;
mod render;

use anyhow::bail;
use clap::Parser;

use cli::{Cli, Command};
use config::Config;
use main_lib::{build_service, init_tracing};
use savings_core::constants::GOAL_EMOJI_OPTIONS;
use savings_core::goals::{AmountDirection, GoalServiceTrait};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_data_dir(cli.data_dir);
    init_tracing(config.log_format);

    let service = build_service(&config)?;
    service.load_goals();

    match cli.command.unwrap_or(Command::List) {
        Command::List => {
            let goals = service.get_goals();
            println!("{}", render::render_summary(&service.get_summary()));
            if goals.is_empty() {
                println!("\nNo tienes metas todavía. Crea la primera con `savings create`.");
            } else {
                println!();
                for goal in &goals {
                    println!("{}", render::render_goal(goal));
                }
            }
        }
        Command::Create {
            title,
            target,
            emoji,
        } => {
            let new_goal = input::parse_new_goal(&title, &target, emoji.as_deref())?;
            let goal = service.create_goal(new_goal)?;
            println!("Meta creada: {}", render::render_goal(&goal));
        }
        Command::Add { goal_id, amount } => {
            adjust(&*service, &goal_id, &amount, AmountDirection::Add)?;
        }
        Command::Subtract { goal_id, amount } => {
            adjust(&*service, &goal_id, &amount, AmountDirection::Subtract)?;
        }
        Command::Delete { goal_id } => match service.delete_goal(&goal_id)? {
            Some(goal) => println!("Meta eliminada: {} {}", goal.emoji, goal.title),
            None => bail!("No goal with id '{}'", goal_id),
        },
        Command::Summary => println!("{}", render::render_summary(&service.get_summary())),
        Command::History { goal_id } => {
            let Some(goal) = service.get_goal(&goal_id) else {
                bail!("No goal with id '{}'", goal_id);
            };
            println!("{} {}", goal.emoji, goal.title);
            let transactions = service.get_transactions(&goal_id);
            if transactions.is_empty() {
                println!("Sin movimientos.");
            }
            for transaction in &transactions {
                println!("{}", render::render_transaction(transaction));
            }
        }
        Command::Emojis => println!("{}", GOAL_EMOJI_OPTIONS.join(" ")),
    }

    Ok(())
}

fn adjust(
    service: &dyn GoalServiceTrait,
    goal_id: &str,
    raw_amount: &str,
    direction: AmountDirection,
) -> anyhow::Result<()> {
    let amount = input::parse_amount(raw_amount)?;
    let Some(goal) = service.adjust_amount(goal_id, amount, direction)? else {
        bail!("No goal with id '{}'", goal_id);
    };
    let verb = match direction {
        AmountDirection::Add => "añadido",
        AmountDirection::Subtract => "retirado",
    };
    println!(
        "Se han {} {} a tu meta.\n{}",
        verb,
        render::format_eur(amount),
        render::render_goal(&goal)
    );
    Ok(())
}
