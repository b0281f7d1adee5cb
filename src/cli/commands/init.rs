use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or(cfg.database);

    println!("Initializing seizelog…");
    println!("Config file : {}", path.display());
    println!("Database    : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("Database initialized at {}", &db_path);

    // Audit entry is best effort here: init must not fail on it.
    if let Err(e) = log::audit(
        &conn,
        "init",
        "database",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("Failed to write internal log: {}", e);
    }

    Ok(())
}
