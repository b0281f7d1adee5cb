use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::{parse_csv, store_batches};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Ingest a CSV diary export: parse, de-collide, store in batches,
/// then report everything that did not make it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let raw = fs::read_to_string(file)?;
        let tz = cfg.zone()?;

        let ingested = parse_csv(&raw, &cfg.default_patient, tz)?;
        let mut failures = ingested.failures;

        info(format!(
            "Parsed {} record(s) from {}",
            ingested.records.len(),
            file
        ));

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let stored = store_batches(&mut pool, &ingested.records, &mut failures)?;

        audit(
            &pool.conn,
            "import",
            &cfg.default_patient,
            &format!("file={} stored={} failed={}", file, stored, failures.len()),
        )?;

        success(format!("Imported {} event(s)", stored));

        if !failures.is_empty() {
            warning(format!("{} row(s) failed:", failures.len()));
            for f in &failures {
                eprintln!("  - {}", f);
            }
        }
    }

    Ok(())
}
