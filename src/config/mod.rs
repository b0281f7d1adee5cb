use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_timezone;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// The diary observes one calendar: all "local day" semantics use this
/// zone unless the config file overrides it.
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_patient")]
    pub default_patient: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub mirror_enabled: bool,
    #[serde(default)]
    pub mirror_url: Option<String>,
    #[serde(default = "default_mirror_timeout")]
    pub mirror_timeout_secs: u64,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_patient() -> String {
    "default".to_string()
}
fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_mirror_timeout() -> u64 {
    30
}
fn default_recent_limit() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_patient: default_patient(),
            timezone: default_timezone(),
            mirror_enabled: false,
            mirror_url: None,
            mirror_timeout_secs: default_mirror_timeout(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("seizelog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".seizelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("seizelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("seizelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    /// The configured IANA zone, parsed.
    pub fn zone(&self) -> AppResult<Tz> {
        parse_timezone(&self.timezone)
    }

    /// Persist the current configuration.
    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Write config file
        if !is_test {
            config.save()?;
            println!("Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("Database:    {:?}", db_path);

        Ok(())
    }
}
