use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bucket::{DEFAULT_WINDOW_SECS, bucket_by_local_day};
use crate::db::pool::DbPool;
use crate::db::queries::{load_med_changes, load_since};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREY, MAGENTA, RESET};
use crate::utils::date;
use crate::utils::formatting::bold;
use crate::utils::time::{format_local, local_to_utc, utc_now};
use chrono::NaiveTime;
use std::collections::HashMap;

const BAR_WIDTH: usize = 40;

/// Render the daily-count chart, one line per local calendar day,
/// with medication changes marked on the day they happened.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Graph { from, no_meds } = cmd {
        let tz = cfg.zone()?;

        let window_start = match from {
            Some(s) => {
                let d = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
                local_to_utc(d.and_time(NaiveTime::MIN), tz)?
            }
            None => utc_now() - DEFAULT_WINDOW_SECS,
        };

        let pool = DbPool::open_ready(&cfg.database)?;
        let events = load_since(&pool.conn, &cfg.default_patient, window_start)?;
        let counts = bucket_by_local_day(&events, Some(window_start), tz)?;

        // Medication markers, keyed by the local date of the change.
        let mut med_marks: HashMap<String, Vec<String>> = HashMap::new();
        if !*no_meds {
            for m in load_med_changes(&pool.conn, &cfg.default_patient, Some(window_start))? {
                let date = format_local(m.timestamp, tz)?.date;
                let label = if m.dosage.is_empty() {
                    m.medication.clone()
                } else {
                    format!("{} {}", m.medication, m.dosage)
                };
                med_marks.entry(date).or_default().push(label);
            }
        }

        let max = counts.iter().map(|c| c.count).max().unwrap_or(0).max(1);

        println!(
            "{}\n",
            bold(&format!(
                "Daily seizure counts for {} ({} day(s)):",
                cfg.default_patient,
                counts.len()
            ))
        );

        for c in &counts {
            let len = (c.count as usize * BAR_WIDTH) / max as usize;
            let bar = if c.count == 0 {
                format!("{}·{}", GREY, RESET)
            } else {
                format!("{}{}{}", CYAN, "█".repeat(len.max(1)), RESET)
            };

            let mut line = format!("{}  {:>3}  {}", c.date, c.count, bar);

            if let Some(marks) = med_marks.get(&c.date) {
                line.push_str(&format!(" {}▲ {}{}", MAGENTA, marks.join(", "), RESET));
            }

            println!("{}", line);
        }
    }

    Ok(())
}
