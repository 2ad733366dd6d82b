//! SQLite connection wrapper (lightweight for CLI usage).

use crate::core::store::HabitStore;
use crate::db::{habits, log};
use crate::errors::AppResult;
use crate::models::{Habit, StreakState};
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Private in-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}

impl HabitStore for DbPool {
    fn get(&mut self, id: i64) -> AppResult<Habit> {
        habits::load_habit(&self.conn, id)
    }

    fn save(&mut self, habit: &Habit) -> AppResult<i64> {
        habits::upsert_habit(&self.conn, habit)
    }

    fn list(&mut self, owner: &str) -> AppResult<Vec<Habit>> {
        habits::load_habits_by_owner(&self.conn, owner)
    }

    fn update_if_unchanged(
        &mut self,
        id: i64,
        expected: StreakState,
        new: StreakState,
    ) -> AppResult<bool> {
        habits::update_streak_if_unchanged(&self.conn, id, expected, new)
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        habits::delete_habit(&self.conn, id)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::record(&self.conn, operation, target, message)
    }
}
