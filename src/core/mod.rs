pub mod backup;
pub mod export;
pub mod habit;
pub mod log;
pub mod store;
pub mod streak;
