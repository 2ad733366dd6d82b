use crate::errors::{AppError, AppResult};
use crate::models::{Habit, StreakState};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

fn date_to_db(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FMT).to_string())
}

/// Map a `habits` row, rejecting malformed dates and negative streaks.
pub fn map_row(row: &Row) -> Result<Habit> {
    let last_raw: Option<String> = row.get("last_completed")?;
    let last_completed = match last_raw.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(
            NaiveDate::parse_from_str(s, DATE_FMT)
                .map_err(|_| conversion_error(3, AppError::InvalidDate(s.to_string())))?,
        ),
    };

    let raw_streak: i64 = row.get("streak")?;
    let streak = u32::try_from(raw_streak).map_err(|_| {
        conversion_error(
            4,
            AppError::InvalidHabit(format!("streak out of range: {}", raw_streak)),
        )
    })?;

    let id: i64 = row.get("id")?;
    let owner: String = row.get("owner")?;
    let label: String = row.get("label")?;
    let created_at: String = row.get("created_at")?;

    Habit::from_parts(
        id,
        &owner,
        &label,
        StreakState::new(last_completed, streak),
        created_at,
    )
    .map_err(|e| conversion_error(0, e))
}

pub fn load_habit(conn: &Connection, id: i64) -> AppResult<Habit> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, owner, label, last_completed, streak, created_at
         FROM habits
         WHERE id = ?1",
    )?;

    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::HabitNotFound(id))
}

pub fn load_habits_by_owner(conn: &Connection, owner: &str) -> AppResult<Vec<Habit>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, owner, label, last_completed, streak, created_at
         FROM habits
         WHERE owner = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([owner], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new habit (id == 0) or overwrite an existing one.
/// `created_at` is kept from the first insert.
pub fn upsert_habit(conn: &Connection, habit: &Habit) -> AppResult<i64> {
    if !habit.is_saved() {
        conn.execute(
            "INSERT INTO habits (owner, label, last_completed, streak, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                habit.owner,
                habit.label,
                date_to_db(habit.last_completed),
                habit.streak,
                habit.created_at,
            ],
        )?;
        return Ok(conn.last_insert_rowid());
    }

    conn.execute(
        "INSERT INTO habits (id, owner, label, last_completed, streak, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
             owner = excluded.owner,
             label = excluded.label,
             last_completed = excluded.last_completed,
             streak = excluded.streak",
        params![
            habit.id,
            habit.owner,
            habit.label,
            date_to_db(habit.last_completed),
            habit.streak,
            habit.created_at,
        ],
    )?;
    Ok(habit.id)
}

/// Conditional write of the streak pair. Both columns change in one
/// statement, so a failure never leaves half an update behind.
pub fn update_streak_if_unchanged(
    conn: &Connection,
    id: i64,
    expected: StreakState,
    new: StreakState,
) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE habits
         SET last_completed = ?1, streak = ?2
         WHERE id = ?3 AND last_completed IS ?4 AND streak = ?5",
        params![
            date_to_db(new.last_completed),
            new.streak,
            id,
            date_to_db(expected.last_completed),
            expected.streak,
        ],
    )?;
    Ok(changed == 1)
}

pub fn delete_habit(conn: &Connection, id: i64) -> AppResult<()> {
    let deleted = conn.execute("DELETE FROM habits WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::HabitNotFound(id));
    }
    Ok(())
}
