use crate::errors::AppResult;
use crate::models::med_change::MedChange;
use crate::models::seizure::Seizure;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Seizure> {
    Ok(Seizure {
        patient: row.get("patient")?,
        timestamp: row.get("ts")?,
        duration: row.get("duration")?,
        notes: row.get("notes")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

fn map_med_row(row: &Row) -> Result<MedChange> {
    Ok(MedChange {
        patient: row.get("patient")?,
        timestamp: row.get("ts")?,
        medication: row.get("medication")?,
        dosage: row.get("dosage")?,
        notes: row.get("notes")?,
    })
}

pub fn insert_seizure(conn: &Connection, s: &Seizure) -> AppResult<()> {
    conn.execute(
        "INSERT INTO seizures (patient, ts, duration, notes, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            s.patient,
            s.timestamp,
            s.duration,
            s.notes,
            s.source,
            s.created_at,
        ],
    )?;
    Ok(())
}

/// Insert up to one storage batch of records inside a single transaction.
///
/// Individually rejected rows (primary-key conflicts and the like) are
/// returned to the caller instead of aborting the batch; a wholesale
/// transaction failure surfaces as the error itself.
pub fn batch_insert_seizures(conn: &mut Connection, batch: &[Seizure]) -> AppResult<Vec<Seizure>> {
    let tx = conn.transaction()?;
    let mut rejected = Vec::new();

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO seizures (patient, ts, duration, notes, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;

        for s in batch {
            let inserted = stmt.execute(params![
                s.patient,
                s.timestamp,
                s.duration,
                s.notes,
                s.source,
                s.created_at,
            ]);

            if inserted.is_err() {
                rejected.push(s.clone());
            }
        }
    }

    tx.commit()?;
    Ok(rejected)
}

pub fn find_seizure(conn: &Connection, patient: &str, ts: i64) -> AppResult<Option<Seizure>> {
    let found = conn
        .query_row(
            "SELECT * FROM seizures WHERE patient = ?1 AND ts = ?2",
            params![patient, ts],
            map_row,
        )
        .optional()?;
    Ok(found)
}

/// Newest events first, for the recent-events list.
pub fn load_recent(conn: &Connection, patient: &str, limit: usize) -> AppResult<Vec<Seizure>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM seizures
         WHERE patient = ?1
         ORDER BY ts DESC
         LIMIT ?2",
    )?;

    let rows = stmt.query_map(params![patient, limit as i64], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All events at or after `from_ts`, oldest first (the charting query).
pub fn load_since(conn: &Connection, patient: &str, from_ts: i64) -> AppResult<Vec<Seizure>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM seizures
         WHERE patient = ?1 AND ts >= ?2
         ORDER BY ts ASC",
    )?;

    let rows = stmt.query_map(params![patient, from_ts], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all(conn: &Connection, patient: &str) -> AppResult<Vec<Seizure>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM seizures
         WHERE patient = ?1
         ORDER BY ts ASC",
    )?;

    let rows = stmt.query_map(params![patient], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns true when a row was actually removed.
pub fn delete_seizure(conn: &Connection, patient: &str, ts: i64) -> AppResult<bool> {
    let changed = conn.execute(
        "DELETE FROM seizures WHERE patient = ?1 AND ts = ?2",
        params![patient, ts],
    )?;
    Ok(changed > 0)
}

pub fn insert_med_change(conn: &Connection, m: &MedChange) -> AppResult<()> {
    conn.execute(
        "INSERT INTO med_changes (patient, ts, medication, dosage, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![m.patient, m.timestamp, m.medication, m.dosage, m.notes],
    )?;
    Ok(())
}

/// Medication changes for the chart overlay, optionally limited to a window.
pub fn load_med_changes(
    conn: &Connection,
    patient: &str,
    from_ts: Option<i64>,
) -> AppResult<Vec<MedChange>> {
    let mut out = Vec::new();

    match from_ts {
        Some(from) => {
            let mut stmt = conn.prepare(
                "SELECT * FROM med_changes
                 WHERE patient = ?1 AND ts >= ?2
                 ORDER BY ts ASC",
            )?;
            let rows = stmt.query_map(params![patient, from], map_med_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT * FROM med_changes
                 WHERE patient = ?1
                 ORDER BY ts ASC",
            )?;
            let rows = stmt.query_map(params![patient], map_med_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}
