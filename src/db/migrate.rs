use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::archive::zip_single_file;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

const HABITS_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS habits (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        owner          TEXT NOT NULL,
        label          TEXT NOT NULL,
        last_completed TEXT,
        streak         INTEGER NOT NULL DEFAULT 0 CHECK(streak >= 0),
        created_at     TEXT NOT NULL,
        CHECK(last_completed IS NOT NULL OR streak = 0)
    );
"#;

const LEGACY_IMPORT: &str = "20240101_0001_import_legacy_habits";
const OWNER_INDEX: &str = "20240115_0002_habits_owner_index";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM log
             WHERE operation = 'migration_applied' AND target = ?1
             LIMIT 1",
            [version],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Zip the database file next to itself before a destructive migration.
/// In-memory databases have no file and are skipped.
fn backup_before_migration(conn: &Connection, version: &str) -> AppResult<()> {
    let db_path: String = conn
        .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default();

    if db_path.is_empty() {
        warning("Could not determine DB path — backup skipped.");
        return Ok(());
    }

    let db_path = Path::new(&db_path);
    let parent = db_path
        .parent()
        .ok_or_else(|| AppError::Migration(format!("no parent dir for {}", db_path.display())))?;

    let backup_path = parent.join(format!(
        "{}-backup_before_{}.zip",
        Local::now().format("%Y%m%d_%H%M%S"),
        version
    ));

    zip_single_file(db_path, &backup_path, "database.sqlite")
        .map_err(|e| AppError::Migration(format!("pre-migration backup failed: {}", e)))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Import a `habits` table written by the Nutriapp prototype
/// (`email`, `habit`, `last_completed`, `streak`) into the current schema.
fn migrate_import_legacy_habits(conn: &Connection) -> AppResult<()> {
    if is_applied(conn, LEGACY_IMPORT)? {
        return Ok(());
    }

    if !table_exists(conn, "habits")? || !table_has_column(conn, "habits", "email")? {
        return Ok(());
    }

    warning("Legacy habits table detected — creating safety backup before migration...");
    backup_before_migration(conn, LEGACY_IMPORT)?;

    // rolled back on drop if any statement fails
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(&format!(
        r#"
        ALTER TABLE habits RENAME TO habits_legacy;

        {HABITS_SCHEMA}

        INSERT INTO habits (id, owner, label, last_completed, streak, created_at)
        SELECT id,
               TRIM(email),
               TRIM(habit),
               NULLIF(TRIM(COALESCE(last_completed, '')), ''),
               CASE
                   WHEN NULLIF(TRIM(COALESCE(last_completed, '')), '') IS NULL THEN 0
                   ELSE MAX(COALESCE(streak, 0), 0)
               END,
               datetime('now')
        FROM habits_legacy
        WHERE TRIM(COALESCE(email, '')) <> ''
          AND TRIM(COALESCE(habit, '')) <> '';

        DROP TABLE habits_legacy;
        "#
    ))?;

    mark_applied(&tx, LEGACY_IMPORT, "Imported legacy habits table")?;
    tx.commit()?;

    success(format!(
        "Migration applied: {} → habits moved to the owner/label schema",
        LEGACY_IMPORT
    ));
    Ok(())
}

fn migrate_owner_index(conn: &Connection) -> AppResult<()> {
    if is_applied(conn, OWNER_INDEX)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_habits_owner ON habits(owner);")?;

    mark_applied(conn, OWNER_INDEX, "Added owner index on habits")?;
    success(format!(
        "Migration applied: {} → added index on habits(owner)",
        OWNER_INDEX
    ));
    Ok(())
}

/// Run every pending migration. Safe to call on each start.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    // legacy import must see the old table before it is created fresh
    migrate_import_legacy_habits(conn)?;

    if !table_exists(conn, "habits")? {
        conn.execute_batch(HABITS_SCHEMA)?;
        success("Created habits table.");
    }

    migrate_owner_index(conn)?;

    Ok(())
}
