use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::habit::HabitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let mut pool = DbPool::new(&cfg.database)?;
        let habits = HabitLogic::list(&mut pool, &cfg.default_user)?;

        if habits.is_empty() {
            info(format!(
                "No habits yet for {}. Add one with `habitlog add <LABEL>`.",
                cfg.default_user
            ));
            return Ok(());
        }

        let mut table = Table::new(
            vec![
                Column::right("ID"),
                Column::left("HABIT"),
                Column::right("STREAK"),
                Column::left("LAST"),
            ],
            cfg.separator(),
        );

        for h in &habits {
            table.add_row(vec![
                h.id.to_string(),
                h.label.clone(),
                h.streak.to_string(),
                h.last_completed
                    .map(|d| date::format_date(&d, &cfg.date_format))
                    .unwrap_or_else(|| "--".to_string()),
            ]);
        }

        println!("📋 Habits of {}:\n", cfg.default_user);
        print!("{}", table.render());
    }

    Ok(())
}
