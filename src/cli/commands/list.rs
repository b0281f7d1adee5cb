use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_recent;
use crate::errors::AppResult;
use crate::utils::formatting::secs2readable;
use crate::utils::table::Table;
use crate::utils::time::format_local;

/// Print the recent-events table, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { last } = cmd {
        let limit = last.unwrap_or(cfg.recent_limit);
        let tz = cfg.zone()?;

        let pool = DbPool::open_ready(&cfg.database)?;
        let events = load_recent(&pool.conn, &cfg.default_patient, limit)?;

        if events.is_empty() {
            println!("No events recorded for {}", cfg.default_patient);
            return Ok(());
        }

        let mut table = Table::new(&["DATE", "TIME", "DURATION", "NOTES"]);

        for ev in &events {
            let stamp = format_local(ev.timestamp, tz)?;
            table.add_row(vec![
                stamp.date,
                stamp.time,
                secs2readable(ev.duration),
                ev.display_notes(),
            ]);
        }

        println!(
            "Last {} event(s) for {}:\n",
            events.len(),
            cfg.default_patient
        );
        print!("{}", table.render());
    }

    Ok(())
}
