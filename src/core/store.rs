//! Storage boundary used by the habit logic.

use crate::errors::AppResult;
use crate::models::{Habit, StreakState};

pub trait HabitStore {
    /// Load one habit; `AppError::HabitNotFound` when the id is unknown.
    fn get(&mut self, id: i64) -> AppResult<Habit>;

    /// Insert (id == 0) or overwrite (id != 0) a habit. Returns the id.
    fn save(&mut self, habit: &Habit) -> AppResult<i64>;

    /// All habits of `owner`, ordered by id.
    fn list(&mut self, owner: &str) -> AppResult<Vec<Habit>>;

    /// Write `new` only if the row still holds `expected`.
    /// Returns false when another writer got there first.
    fn update_if_unchanged(
        &mut self,
        id: i64,
        expected: StreakState,
        new: StreakState,
    ) -> AppResult<bool>;

    fn delete(&mut self, id: i64) -> AppResult<()>;

    /// Append a line to the audit log. Callers treat failures as non fatal.
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}
