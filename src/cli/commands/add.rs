use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_time;

/// Record one seizure event from a local wall-clock date and time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        time: time_str,
        duration,
        notes,
    } = cmd
    {
        let d =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let t = parse_time(time_str).ok_or_else(|| AppError::InvalidTime(time_str.clone()))?;

        let mut pool = DbPool::open_ready(&cfg.database)?;

        AddLogic::apply(
            &mut pool,
            &cfg.default_patient,
            d,
            t,
            *duration,
            notes,
            cfg.zone()?,
        )?;
    }

    Ok(())
}
