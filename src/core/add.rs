use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_seizure;
use crate::errors::{AppError, AppResult};
use crate::models::seizure::Seizure;
use crate::ui::messages::success;
use crate::utils::time::{format_local, local_to_utc};
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Record one event from a local wall-clock date and time.
    pub fn apply(
        pool: &mut DbPool,
        patient: &str,
        date: NaiveDate,
        time: NaiveTime,
        duration: i64,
        notes: &str,
        tz: Tz,
    ) -> AppResult<Seizure> {
        if patient.trim().is_empty() {
            return Err(AppError::EmptyPatient);
        }

        if duration <= 0 {
            return Err(AppError::InvalidDuration(duration.to_string()));
        }

        let ts = local_to_utc(date.and_time(time), tz)?;
        let seizure = Seizure::new(patient, ts, duration, notes.trim());

        insert_seizure(&pool.conn, &seizure)?;

        audit(
            &pool.conn,
            "add",
            patient,
            &format!("ts={} duration={}", ts, duration),
        )?;

        let stamp = format_local(ts, tz)?;
        success(format!(
            "Recorded event for {} on {} at {}",
            patient, stamp.date, stamp.time
        ));

        Ok(seizure)
    }
}
