use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habit::HabitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create a habit for the current user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { label } = cmd {
        let label = label.join(" ");
        let mut pool = DbPool::new(&cfg.database)?;

        let habit = HabitLogic::add(&mut pool, &cfg.default_user, &label)?;
        success(format!("Habit #{} added: {}", habit.id, habit.label));
    }

    Ok(())
}
