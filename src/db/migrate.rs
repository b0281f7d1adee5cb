//! Database schema migrations, stepped through `PRAGMA user_version`.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Version the schema is at after every migration has run.
pub const SCHEMA_VERSION: i64 = 2;

pub fn schema_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

fn set_schema_version(conn: &Connection, v: i64) -> AppResult<()> {
    conn.pragma_update(None, "user_version", v)?;
    Ok(())
}

/// Run every migration the database has not seen yet.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut v = schema_version(conn)?;

    if v < 1 {
        migrate_v1(conn)?;
        v = 1;
        set_schema_version(conn, v)?;
    }

    if v < 2 {
        migrate_v2(conn)?;
        v = 2;
        set_schema_version(conn, v)?;
    }

    if v > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "Database schema version {} is newer than this build supports ({})",
            v, SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// v1: seizure events plus the internal audit log.
///
/// `(patient, ts)` is the primary key: no two events for the same patient
/// share an instant. Ingestion guarantees this before insert.
fn migrate_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS seizures (
            patient    TEXT NOT NULL,
            ts         INTEGER NOT NULL,
            duration   INTEGER NOT NULL DEFAULT 0,
            notes      TEXT NOT NULL DEFAULT '',
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL,
            PRIMARY KEY (patient, ts)
        );

        CREATE INDEX IF NOT EXISTS idx_seizures_patient_ts ON seizures(patient, ts DESC);

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

/// v2: medication changes, overlaid on the daily chart.
fn migrate_v2(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS med_changes (
            patient    TEXT NOT NULL,
            ts         INTEGER NOT NULL,
            medication TEXT NOT NULL,
            dosage     TEXT NOT NULL DEFAULT '',
            notes      TEXT NOT NULL DEFAULT '',
            PRIMARY KEY (patient, ts, medication)
        );

        CREATE INDEX IF NOT EXISTS idx_med_changes_patient_ts ON med_changes(patient, ts);
        "#,
    )?;
    Ok(())
}

/// Quick structural integrity check used by `db --check`.
pub fn check_integrity(conn: &Connection) -> AppResult<bool> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result == "ok")
}
