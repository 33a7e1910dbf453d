use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves here,
/// so it must be created first.
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

/// Check whether a migration id is already recorded in `log`.
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

/// Run `sql` once, keyed by `version`.
fn apply_once(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<()> {
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(&format!("BEGIN;\n{sql}\nCOMMIT;"))?;
    mark_applied(conn, version, message)?;

    success(format!("Migration applied: {} → {}", version, message));
    Ok(())
}

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id          TEXT PRIMARY KEY,
        work_mode   TEXT NOT NULL DEFAULT 'ONSITE' CHECK(work_mode IN ('ONSITE','REMOTE')),
        created_at  TEXT NOT NULL
    );
"#;

const CREATE_GEOFENCES: &str = r#"
    CREATE TABLE IF NOT EXISTS geofences (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        name           TEXT NOT NULL UNIQUE,
        latitude       REAL NOT NULL,
        longitude      REAL NOT NULL,
        radius_meters  REAL NOT NULL CHECK(radius_meters > 0),
        created_at     TEXT NOT NULL
    );
"#;

const CREATE_PUNCHES: &str = r#"
    CREATE TABLE IF NOT EXISTS punches (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id     TEXT NOT NULL,
        kind        TEXT NOT NULL CHECK(kind IN ('in','out')),
        timestamp   TEXT NOT NULL,
        latitude    REAL NOT NULL,
        longitude   REAL NOT NULL,
        project_id  TEXT,
        task_id     TEXT,
        source      TEXT NOT NULL DEFAULT 'cli',
        created_at  TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_punches_user_time ON punches(user_id, timestamp);
    CREATE INDEX IF NOT EXISTS idx_punches_project ON punches(project_id);
"#;

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db(). Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    apply_once(
        conn,
        "20250601_0001_create_users",
        "Created users table",
        CREATE_USERS,
    )?;
    apply_once(
        conn,
        "20250601_0002_create_geofences",
        "Created geofences table",
        CREATE_GEOFENCES,
    )?;
    apply_once(
        conn,
        "20250601_0003_create_punches",
        "Created punches table",
        CREATE_PUNCHES,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |_| Ok(()),
        )
        .optional()
        .unwrap()
        .is_some()
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        for t in ["log", "users", "geofences", "punches"] {
            assert!(table_exists(&conn, t), "missing table {t}");
        }

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, 3);
    }
}
