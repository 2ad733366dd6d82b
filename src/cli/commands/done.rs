use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habit::HabitLogic;
use crate::core::streak::Transition;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use crate::utils::date;

/// Mark a habit as done, today or on `--date`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id, date: date_arg } = cmd {
        let today = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;

        let completion = match HabitLogic::complete(&mut pool, &cfg.default_user, *id, today) {
            Ok(c) => c,
            Err(e) => {
                error(format!("Could not update habit #{}", id));
                return Err(e);
            }
        };

        let day = date::format_date(&today, &cfg.date_format);
        let streak = completion.streak();

        match completion.transition {
            Transition::Started => {
                success(format!("Habit #{} done on {} — streak started: {}", id, day, streak))
            }
            Transition::Extended => {
                success(format!("Habit #{} done on {} — streak: {} 🔥", id, day, streak))
            }
            Transition::Repeated => info(format!(
                "Habit #{} was already done on {} — streak stays at {}",
                id, day, streak
            )),
            Transition::Reset => {
                warning(format!("Habit #{} done on {} — streak reset to {}", id, day, streak))
            }
        }
    }

    Ok(())
}
