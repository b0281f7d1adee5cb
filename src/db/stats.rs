use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::format_local;
use chrono_tz::Tz;
use std::fs;

/// Print a short database summary for `db --info`.
pub fn print_db_info(pool: &mut DbPool, db_path: &str, tz: Tz) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        schema_version(&pool.conn)?
    );

    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM seizures", [], |row| row.get(0))?;
    println!("{}• Total events:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    let med_count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM med_changes", [], |row| row.get(0))?;
    println!("{}• Medication changes:{} {}", CYAN, RESET, med_count);

    let first_ts: Option<i64> = pool
        .conn
        .query_row("SELECT MIN(ts) FROM seizures", [], |row| row.get(0))?;

    let last_ts: Option<i64> = pool
        .conn
        .query_row("SELECT MAX(ts) FROM seizures", [], |row| row.get(0))?;

    let render = |ts: Option<i64>| -> String {
        ts.and_then(|t| format_local(t, tz).ok())
            .map(|s| format!("{} {}", s.date, s.time))
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Event range:{}", CYAN, RESET);
    println!("    from: {}", render(first_ts));
    println!("    to:   {}", render(last_ts));

    println!();
    Ok(())
}
