use crate::core::store::HabitStore;
use crate::core::streak::{self, Completion};
use crate::errors::{AppError, AppResult};
use crate::models::Habit;
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// Read / compute / conditional-write rounds before giving up on a habit
/// that keeps changing underneath us.
pub const MAX_ATTEMPTS: usize = 3;

/// High-level business logic for habits.
pub struct HabitLogic;

/// Audit writes must not fail the operation that triggered them.
fn audit<S: HabitStore>(store: &mut S, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.audit(operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

impl HabitLogic {
    /// Create a habit for `owner`. The new habit has no completion and a
    /// streak of 0.
    pub fn add<S: HabitStore>(store: &mut S, owner: &str, label: &str) -> AppResult<Habit> {
        let mut habit = Habit::new(owner, label)?;
        habit.id = store.save(&habit)?;

        audit(
            store,
            "add",
            &format!("habit #{}", habit.id),
            &format!("Added habit '{}' for {}", habit.label, habit.owner),
        );
        Ok(habit)
    }

    /// Load a habit that must belong to `owner`. Habits of other users are
    /// reported as not found.
    pub fn show<S: HabitStore>(store: &mut S, owner: &str, id: i64) -> AppResult<Habit> {
        let habit = store.get(id)?;
        if habit.owner != owner.trim() {
            return Err(AppError::HabitNotFound(id));
        }
        Ok(habit)
    }

    pub fn list<S: HabitStore>(store: &mut S, owner: &str) -> AppResult<Vec<Habit>> {
        store.list(owner.trim())
    }

    /// Mark a habit complete on `today` and persist the new streak pair.
    ///
    /// The write only succeeds if the stored pair is still the one the
    /// transition was computed from; otherwise the habit is re-read and the
    /// transition recomputed, up to [`MAX_ATTEMPTS`] times.
    pub fn complete<S: HabitStore>(
        store: &mut S,
        owner: &str,
        id: i64,
        today: NaiveDate,
    ) -> AppResult<Completion> {
        for _ in 0..MAX_ATTEMPTS {
            let habit = Self::show(store, owner, id)?;
            let expected = habit.state();
            let completion = streak::complete(&habit, today);

            if !completion.transition.changes_streak() {
                // same-day repeat: nothing to write
                return Ok(completion);
            }

            if store.update_if_unchanged(id, expected, completion.state)? {
                audit(
                    store,
                    "done",
                    &format!("habit #{}", id),
                    &format!(
                        "{} on {}: streak {} → {} ({})",
                        habit.label,
                        today.format("%Y-%m-%d"),
                        expected.streak,
                        completion.streak(),
                        completion.transition.as_str()
                    ),
                );
                return Ok(completion);
            }
        }

        Err(AppError::Conflict(id))
    }

    pub fn delete<S: HabitStore>(store: &mut S, owner: &str, id: i64) -> AppResult<Habit> {
        let habit = Self::show(store, owner, id)?;
        store.delete(id)?;

        audit(
            store,
            "del",
            &format!("habit #{}", id),
            &format!("Deleted habit '{}' (streak {})", habit.label, habit.streak),
        );
        Ok(habit)
    }
}
