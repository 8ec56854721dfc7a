use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
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

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn local_storage_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='local_storage'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn local_storage_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('local_storage')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// One document per key, overwritten on every save.
fn create_local_storage(conn: &Connection) -> Result<()> {
    const VERSION: &str = "20250601_0001_create_local_storage";

    if is_applied(conn, VERSION)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS local_storage (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, VERSION, "Created local_storage table")?;
    success("Created local_storage table.");
    Ok(())
}

/// Databases created before 0.2 have no `updated_at` column.
fn add_updated_at(conn: &Connection) -> Result<()> {
    const VERSION: &str = "20250820_0002_local_storage_updated_at";

    if is_applied(conn, VERSION)? {
        return Ok(());
    }

    if local_storage_exists(conn)? && !local_storage_has_column(conn, "updated_at")? {
        warning("Adding 'updated_at' column to local_storage...");
        conn.execute_batch(
            "ALTER TABLE local_storage ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        )?;
    }

    mark_applied(conn, VERSION, "Added updated_at to local_storage")?;
    success(format!("Migration applied: {VERSION}"));
    Ok(())
}

/// Public entry point: run all pending migrations in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_local_storage(conn)?;
    add_updated_at(conn)?;
    Ok(())
}

/// List applied migration versions, oldest first.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
