//! Configuration management for the actilog application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and loaded with a fall-back to defaults, so the application runs with
//! zero setup. The `init` command drives the interactive wizard below.
//!
//! ## Configuration Structure
//!
//! - **Monitor Config**: idle threshold, poll cadence, and backup interval
//! - **Storage Config**: the daily log directory and the backup directory
//!
//! Both modules are optional in the file; missing modules resolve to
//! defaults at the point of use.

use super::data_storage::{self, DataStorage};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Activity monitor configuration settings.
///
/// Controls the segmentation engine's timing: how long input silence must
/// last before the user counts as idle, how often the engine ticks, and
/// how often the daily store is copied to the backup directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Inactivity threshold in seconds before the user is considered idle.
    pub idle_threshold: u64,

    /// Poll interval in milliseconds between engine ticks.
    pub poll_interval: u64,

    /// Interval in minutes between backups of the current day's store.
    pub backup_interval: u64,
}

impl Default for MonitorConfig {
    /// Default values:
    /// - 60 seconds inactivity threshold
    /// - 1000ms polling interval
    /// - 30 minutes backup interval
    fn default() -> Self {
        MonitorConfig {
            idle_threshold: 60,
            poll_interval: 1000,
            backup_interval: 30,
        }
    }
}

/// Locations of the daily activity logs and their backups.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Directory holding one spreadsheet per day.
    pub activity_dir: PathBuf,

    /// Directory the backup scheduler copies the current day's file into.
    pub backup_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let documents = data_storage::documents_dir();
        StorageConfig {
            activity_dir: documents.join("Activity"),
            backup_dir: documents.join("Activity_Backup"),
        }
    }
}

/// Main configuration container for the entire application.
///
/// Unconfigured modules are omitted from the JSON output and resolve to
/// their defaults when read back.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads configuration from the filesystem, returning defaults if no
    /// configuration file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Presents the available modules, prompts for each selected module's
    /// parameters with existing values as defaults, and returns the updated
    /// configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let module_names = ["Monitor", "Storage"];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&module_names)
            .interact()?;

        for &selection in &selected {
            match module_names[selection] {
                "Monitor" => {
                    let default = config.monitor.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMonitor);
                    config.monitor = Some(MonitorConfig {
                        idle_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdleThreshold.to_string())
                            .default(default.idle_threshold)
                            .interact_text()?,

                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,

                        backup_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBackupInterval.to_string())
                            .default(default.backup_interval)
                            .interact_text()?,
                    });
                }
                "Storage" => {
                    let default = config.storage.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    let activity_dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptActivityDir.to_string())
                        .default(default.activity_dir.display().to_string())
                        .interact_text()?;
                    let backup_dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptBackupDir.to_string())
                        .default(default.backup_dir.display().to_string())
                        .interact_text()?;
                    config.storage = Some(StorageConfig {
                        activity_dir: PathBuf::from(activity_dir),
                        backup_dir: PathBuf::from(backup_dir),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
