use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) HABITS / OWNERS
    //
    let (habits, owners): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COUNT(DISTINCT owner) FROM habits",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!("{}• Habits:{} {}{}{}", CYAN, RESET, GREEN, habits, RESET);
    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, owners, RESET);

    //
    // 3) LONGEST STORED STREAK
    //
    let best: Option<(String, String, i64)> = pool
        .conn
        .query_row(
            "SELECT owner, label, streak FROM habits
             WHERE streak > 0
             ORDER BY streak DESC, id ASC
             LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    match best {
        Some((owner, label, streak)) => println!(
            "{}• Longest streak:{} {} day(s) — {} ({})",
            CYAN, RESET, streak, label, owner
        ),
        None => println!("{}• Longest streak:{} {GREY}--{RESET}", CYAN, RESET),
    }

    //
    // 4) LAST COMPLETION
    //
    let last: Option<String> = pool
        .conn
        .query_row("SELECT MAX(last_completed) FROM habits", [], |row| row.get(0))?;
    println!(
        "{}• Last completion:{} {}",
        CYAN,
        RESET,
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
