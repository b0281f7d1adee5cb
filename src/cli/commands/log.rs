use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::open_ready(&cfg.database)?;

        for (date, operation, message) in load_log(&pool.conn)? {
            println!("{}  [{}]  {}", date, operation, message);
        }
    }

    Ok(())
}
