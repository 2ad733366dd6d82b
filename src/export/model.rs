use crate::models::Habit;
use serde::Serialize;

/// Flat row written by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct HabitExport {
    pub id: i64,
    pub owner: String,
    pub label: String,
    pub last_completed: String,
    pub streak: u32,
    pub created_at: String,
}

impl From<&Habit> for HabitExport {
    fn from(h: &Habit) -> Self {
        Self {
            id: h.id,
            owner: h.owner.clone(),
            label: h.label.clone(),
            last_completed: h
                .last_completed
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            streak: h.streak,
            created_at: h.created_at.clone(),
        }
    }
}
