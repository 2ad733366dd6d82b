use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// The `(last_completed, streak)` pair driven by the streak engine.
///
/// It is also the token used by the store's conditional update: a write only
/// lands if the row still holds the state that was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StreakState {
    pub last_completed: Option<NaiveDate>,
    pub streak: u32,
}

impl StreakState {
    pub fn new(last_completed: Option<NaiveDate>, streak: u32) -> Self {
        Self {
            last_completed,
            streak,
        }
    }

    /// State of a habit that was never completed.
    pub fn fresh() -> Self {
        Self::default()
    }
}

/// A recurring behavior tracked by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Habit {
    /// 0 until the habit has been saved.
    pub id: i64,
    pub owner: String,
    pub label: String,
    pub last_completed: Option<NaiveDate>,
    pub streak: u32,
    pub created_at: String,
}

impl Habit {
    /// Build a new, never completed habit.
    pub fn new(owner: &str, label: &str) -> AppResult<Self> {
        Self::from_parts(
            0,
            owner,
            label,
            StreakState::fresh(),
            Local::now().to_rfc3339(),
        )
    }

    /// Build a habit from stored values, checking every invariant.
    pub fn from_parts(
        id: i64,
        owner: &str,
        label: &str,
        state: StreakState,
        created_at: String,
    ) -> AppResult<Self> {
        let owner = owner.trim();
        let label = label.trim();

        if owner.is_empty() {
            return Err(AppError::InvalidHabit("owner must not be empty".into()));
        }
        if label.is_empty() {
            return Err(AppError::InvalidHabit("label must not be empty".into()));
        }
        if state.last_completed.is_none() && state.streak != 0 {
            return Err(AppError::InvalidHabit(format!(
                "streak {} without a completion date",
                state.streak
            )));
        }

        Ok(Self {
            id,
            owner: owner.to_string(),
            label: label.to_string(),
            last_completed: state.last_completed,
            streak: state.streak,
            created_at,
        })
    }

    pub fn state(&self) -> StreakState {
        StreakState::new(self.last_completed, self.streak)
    }

    /// Replace the streak pair with the engine's output.
    pub fn apply(&mut self, state: StreakState) {
        self.last_completed = state.last_completed;
        self.streak = state.streak;
    }

    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}
