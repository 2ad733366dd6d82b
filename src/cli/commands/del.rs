use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habit::HabitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        // fail early on unknown ids, before prompting
        let habit = HabitLogic::show(&mut pool, &cfg.default_user, *id)?;

        if !*yes
            && !confirm(format!(
                "Delete habit #{} '{}' (streak {})? This action is irreversible.",
                habit.id, habit.label, habit.streak
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        HabitLogic::delete(&mut pool, &cfg.default_user, *id)?;
        success(format!("Habit #{} has been deleted.", id));
    }

    Ok(())
}
