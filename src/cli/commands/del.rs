use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::mirror::{Mirror, MirrorClient};
use crate::ui::messages::{info, warning};
use crate::utils::date;
use crate::utils::time::{local_to_utc, parse_time};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        time: time_str,
        local_only,
        yes,
    } = cmd
    {
        let d =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let t = parse_time(time_str).ok_or_else(|| AppError::InvalidTime(time_str.clone()))?;

        let tz = cfg.zone()?;
        let ts = local_to_utc(d.and_time(t), tz)?;

        if !*yes {
            let prompt = format!(
                "Delete the event at {} {} for {}? This action is irreversible.",
                date_str, time_str, cfg.default_patient
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        // The mirror client only exists when reconciliation should run.
        let client: Option<MirrorClient> = if cfg.mirror_enabled && !*local_only {
            let url = cfg
                .mirror_url
                .as_deref()
                .ok_or(AppError::MirrorUnconfigured)?;
            Some(MirrorClient::new(url, cfg.mirror_timeout_secs)?)
        } else {
            None
        };

        let mut pool = DbPool::open_ready(&cfg.database)?;

        DeleteLogic::apply(
            &mut pool,
            client.as_ref().map(|c| c as &dyn Mirror),
            &cfg.default_patient,
            ts,
            tz,
        )?;
    }

    Ok(())
}
