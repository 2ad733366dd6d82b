pub mod habit;

pub use habit::{Habit, StreakState};
