//! Configuration for the timetrack application.
//!
//! Settings live in `config.json` inside the per-user data directory resolved
//! by [`DataStorage`]. A missing file is not an error: every field has a
//! default, so the application runs without any setup.
//!
//! ## File location
//!
//! - **Windows**: `%LOCALAPPDATA%\timetrack\config.json`
//! - **macOS**: `~/Library/Application Support/timetrack/config.json`
//! - **Linux**: `~/.local/share/timetrack/config.json`
//!
//! ## Database path precedence
//!
//! 1. `--db` on the command line
//! 2. the `TIMETRACK_DB` environment variable (also read from `.env`)
//! 3. `db_path` in this file
//! 4. `timetrack.db` in the data directory
//!
//! ## Example
//!
//! ```json
//! {
//!   "db_path": "/home/me/work/time.db",
//!   "timesheet": {
//!     "comment_separator": " / ",
//!     "empty_comment": "No comment",
//!     "date_label_format": "%d/%m"
//!   }
//! }
//! ```

use super::data_storage::DataStorage;
use crate::libs::error::TrackerResult;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "timetrack.db";
pub const DB_PATH_ENV: &str = "TIMETRACK_DB";

/// How timesheet cells are labelled and merged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TimesheetConfig {
    /// Joins the distinct descriptions of one cell.
    pub comment_separator: String,

    /// Cell comment when no entry in the cell has a description.
    pub empty_comment: String,

    /// `chrono` format of the column labels.
    pub date_label_format: String,
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        TimesheetConfig {
            comment_separator: " / ".to_string(),
            empty_comment: "No comment".to_string(),
            date_label_format: "%d/%m".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    pub timesheet: TimesheetConfig,
}

impl Config {
    /// Loads `config.json`, or the defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> TrackerResult<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any
    /// existing file.
    pub fn save(&self) -> TrackerResult<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the database file: environment first, then `db_path`, then
    /// the data directory default.
    pub fn database_path(&self) -> TrackerResult<PathBuf> {
        if let Some(path) = env::var_os(DB_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
