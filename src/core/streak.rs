//! Habit streak engine.
//!
//! Pure transition from the stored `(last_completed, streak)` pair and the
//! date of a completion event to the pair that must be stored next.
//! `today` always comes from the caller; nothing here reads the clock.

use crate::models::{Habit, StreakState};
use chrono::NaiveDate;
use serde::Serialize;

/// What a completion event did to the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transition {
    /// First completion ever.
    Started,
    /// Completed exactly one day after the previous completion.
    Extended,
    /// Already completed on this date; nothing changes.
    Repeated,
    /// A day was skipped, or `today` lies before the stored date.
    Reset,
}

impl Transition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::Started => "started",
            Transition::Extended => "extended",
            Transition::Repeated => "repeated",
            Transition::Reset => "reset",
        }
    }

    /// True when the stored pair differs from the input pair.
    pub fn changes_streak(&self) -> bool {
        !matches!(self, Transition::Repeated)
    }
}

/// Result of one completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub state: StreakState,
    pub transition: Transition,
}

impl Completion {
    pub fn last_completed(&self) -> NaiveDate {
        // every transition stamps `today`
        self.state.last_completed.unwrap_or_default()
    }

    pub fn streak(&self) -> u32 {
        self.state.streak
    }
}

/// Apply a completion on `today` to `state`.
///
/// Total over its inputs: a stale non-zero streak without a completion date
/// is treated as a first completion.
pub fn advance(state: StreakState, today: NaiveDate) -> Completion {
    let (streak, transition) = match state.last_completed {
        None => (1, Transition::Started),
        Some(last) => match (today - last).num_days() {
            1 => (state.streak.saturating_add(1), Transition::Extended),
            0 => (state.streak, Transition::Repeated),
            _ => (1, Transition::Reset),
        },
    };

    Completion {
        state: StreakState::new(Some(today), streak),
        transition,
    }
}

/// Apply a completion on `today` to a habit's current pair.
pub fn complete(habit: &Habit, today: NaiveDate) -> Completion {
    advance(habit.state(), today)
}
