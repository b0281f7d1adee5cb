use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).unwrap_or_else(|_| "<unreadable>".to_string())
            );
        }

        if *check {
            match cfg.zone() {
                Ok(tz) => success(format!("Timezone '{}' is valid", tz)),
                Err(e) => warning(format!("{}", e)),
            }

            if cfg.mirror_enabled {
                match &cfg.mirror_url {
                    Some(url) => success(format!("Mirror enabled: {}", url)),
                    None => warning("mirror_enabled is set but mirror_url is missing"),
                }
            } else {
                println!("Mirror: disabled");
            }
        }
    }

    Ok(())
}
