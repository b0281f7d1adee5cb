use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat, notify_export_success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let events = load_all(&pool.conn, &cfg.default_patient)?;

        match format {
            ExportFormat::Csv => export::csv::write_csv(file, &events, cfg.zone()?)?,
            ExportFormat::Json => export::json::write_json(file, &events)?,
        }

        notify_export_success(format.as_str(), Path::new(file));
    }

    Ok(())
}
