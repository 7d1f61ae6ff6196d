//! Config CLI commands

use clap::{Subcommand, ValueEnum};

use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show data locations and active settings
    Show,

    /// Change a setting and persist it
    Set {
        /// Setting to change
        #[arg(value_enum)]
        key: SettingKey,
        /// New value
        value: String,
    },
}

/// Settings that can be changed from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingKey {
    /// Symbol shown wherever the CLI prints amounts
    CurrencySymbol,
    /// strftime pattern for dates in listings
    DateFormat,
}

impl SettingKey {
    fn label(&self) -> &'static str {
        match self {
            Self::CurrencySymbol => "currency symbol",
            Self::DateFormat => "date format",
        }
    }
}

/// Handle a config command
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> TrackerResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Money Tracker Configuration");
            println!("===========================");
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }

        ConfigCommands::Set { key, value } => {
            let value = value.trim();
            if value.is_empty() {
                return Err(TrackerError::Validation(format!(
                    "The {} cannot be empty",
                    key.label()
                )));
            }

            match key {
                SettingKey::CurrencySymbol => settings.currency_symbol = value.to_string(),
                SettingKey::DateFormat => settings.date_format = value.to_string(),
            }
            settings.save(paths)?;

            println!("Set {} to: {}", key.label(), value);
        }
    }

    Ok(())
}
