use crate::core::reconcile::{delete_matches, find_mirror_rows};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_seizure, find_seizure};
use crate::errors::{AppError, AppResult};
use crate::mirror::Mirror;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::format_local;
use chrono_tz::Tz;

/// High-level business logic for the `del` command: remove one stored
/// event and, when a mirror is attached, reconcile-delete its rows there.
pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(
        pool: &mut DbPool,
        mirror: Option<&dyn Mirror>,
        patient: &str,
        ts: i64,
        tz: Tz,
    ) -> AppResult<()> {
        let stamp = format_local(ts, tz)?;

        let seizure = find_seizure(&pool.conn, patient, ts)?
            .ok_or_else(|| AppError::NoSuchEvent(format!("{} {}", stamp.date, stamp.time)))?;

        delete_seizure(&pool.conn, patient, ts)?;
        audit(&pool.conn, "del", patient, &format!("ts={}", ts))?;
        success(format!(
            "Deleted event for {} on {} at {}",
            patient, stamp.date, stamp.time
        ));

        // Reconcile the mirror only after the local delete. A snapshot
        // fetch failure is fatal here; a single row that refuses to go is
        // reported and the remaining rows are still attempted.
        if let Some(mirror) = mirror {
            let matches = find_mirror_rows(mirror, ts, seizure.duration, &seizure.notes, tz)?;

            if matches.is_empty() {
                info("No mirror rows matched this event");
                return Ok(());
            }

            let failures = delete_matches(mirror, &matches);
            let deleted = matches.len() - failures.len();
            info(format!("Removed {} mirror row(s)", deleted));

            for f in failures {
                warning(f);
            }
        }

        Ok(())
    }
}
