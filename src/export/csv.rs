use crate::errors::AppResult;
use crate::models::seizure::Seizure;
use crate::utils::time::local_datetime;
use chrono_tz::Tz;
use csv::Writer;

/// Write events to a CSV file in the diary's interchange shape: local
/// timestamp, duration in seconds, notes. The output feeds back into
/// `import` unchanged.
pub fn write_csv(path: &str, events: &[Seizure], tz: Tz) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["timestamp", "duration", "notes"])?;

    for ev in events {
        let stamp = local_datetime(ev.timestamp, tz)?
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        wtr.write_record(&[stamp, ev.duration.to_string(), ev.notes.clone()])?;
    }

    wtr.flush()?;
    Ok(())
}
