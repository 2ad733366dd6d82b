use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habit::HabitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET, color_for_streak, colorize_optional};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let habit = HabitLogic::show(&mut pool, &cfg.default_user, *id)?;

        let last = habit
            .last_completed
            .map(|d| date::format_date(&d, &cfg.date_format))
            .unwrap_or_else(|| "--".to_string());

        println!("{CYAN}Habit #{}{RESET}", habit.id);
        println!("  label          : {}", habit.label);
        println!("  owner          : {}", habit.owner);
        println!(
            "  streak         : {}{}{RESET}",
            color_for_streak(habit.streak),
            habit.streak
        );
        println!("  last completed : {}", colorize_optional(&last));
        println!("  created at     : {}", habit.created_at);
    }

    Ok(())
}
