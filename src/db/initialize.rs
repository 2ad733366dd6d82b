use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Schema creation and upgrades all live in the migration runner.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)
}
