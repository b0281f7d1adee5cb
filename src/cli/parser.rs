use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for seizelog
/// CLI application to keep a personal seizure diary with SQLite
#[derive(Parser)]
#[command(
    name = "seizelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal seizure diary CLI: log events, chart daily counts, reconcile an external spreadsheet mirror",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Patient the command applies to (default from the config file)
    #[arg(global = true, long = "patient")]
    pub patient: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configured timezone and mirror settings")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Record one seizure event
    Add {
        /// Event date in the local calendar (YYYY-MM-DD)
        date: String,

        /// Event time on the local clock (HH:MM or HH:MM:SS)
        time: String,

        /// Duration in seconds
        #[arg(short = 'd', long = "duration")]
        duration: i64,

        /// Free-text notes
        #[arg(long = "notes", default_value = "")]
        notes: String,
    },

    /// List recent events, newest first
    List {
        /// How many events to show (default from the config file)
        #[arg(long = "last")]
        last: Option<usize>,
    },

    /// Delete one event; reconciles the mirror when enabled
    Del {
        /// Event date in the local calendar (YYYY-MM-DD)
        date: String,

        /// Event time on the local clock (HH:MM or HH:MM:SS)
        time: String,

        /// Skip the mirror reconciliation even when enabled
        #[arg(long = "local-only")]
        local_only: bool,

        /// Do not ask for confirmation
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Import events from a CSV file (header row first: timestamp, duration, notes)
    Import {
        /// Path of the CSV file to ingest
        file: String,
    },

    /// Chart daily event counts over a window
    Graph {
        /// Window start date (YYYY-MM-DD local; default six weeks back)
        #[arg(long = "from")]
        from: Option<String>,

        /// Hide medication-change markers
        #[arg(long = "no-meds")]
        no_meds: bool,
    },

    /// Record or list medication changes
    Med {
        #[command(subcommand)]
        action: MedAction,
    },

    /// Export stored events
    Export {
        #[arg(long = "format", value_enum, help = "Output format (csv or json)")]
        format: ExportFormat,

        #[arg(long = "file", help = "Output file path")]
        file: String,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum MedAction {
    /// Record a medication change
    Add {
        /// Change date in the local calendar (YYYY-MM-DD)
        date: String,

        /// Medication name
        medication: String,

        #[arg(long = "dose", default_value = "", help = "New dosage, free text")]
        dosage: String,

        #[arg(long = "notes", default_value = "")]
        notes: String,
    },

    /// List medication changes, oldest first
    List,
}
