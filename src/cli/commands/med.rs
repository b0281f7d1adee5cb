use crate::cli::parser::{Commands, MedAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_med_change, load_med_changes};
use crate::errors::{AppError, AppResult};
use crate::models::med_change::MedChange;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::table::Table;
use crate::utils::time::{format_local, local_to_utc};
use chrono::NaiveTime;

/// Record or list medication changes.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Med { action } = cmd {
        let tz = cfg.zone()?;
        let pool = DbPool::open_ready(&cfg.database)?;

        match action {
            MedAction::Add {
                date: date_str,
                medication,
                dosage,
                notes,
            } => {
                let d = date::parse_date(date_str)
                    .ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

                // Changes are tracked at day granularity: local midnight.
                let ts = local_to_utc(d.and_time(NaiveTime::MIN), tz)?;

                let change = MedChange {
                    patient: cfg.default_patient.clone(),
                    timestamp: ts,
                    medication: medication.clone(),
                    dosage: dosage.clone(),
                    notes: notes.clone(),
                };

                insert_med_change(&pool.conn, &change)?;
                audit(
                    &pool.conn,
                    "med-add",
                    &cfg.default_patient,
                    &format!("{} {} on {}", medication, dosage, date_str),
                )?;

                success(format!("Recorded medication change: {}", medication));
            }

            MedAction::List => {
                let changes = load_med_changes(&pool.conn, &cfg.default_patient, None)?;

                if changes.is_empty() {
                    println!("No medication changes for {}", cfg.default_patient);
                    return Ok(());
                }

                let mut table = Table::new(&["DATE", "MEDICATION", "DOSE", "NOTES"]);
                for m in &changes {
                    let stamp = format_local(m.timestamp, tz)?;
                    table.add_row(vec![
                        stamp.date,
                        m.medication.clone(),
                        m.dosage.clone(),
                        m.notes.clone(),
                    ]);
                }

                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
