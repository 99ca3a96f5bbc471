//! Running timer state.
//!
//! At most one timer runs at a time. Its work item, description and start
//! time are kept in `timer.json` in the data directory so that `start` and
//! `stop` can be separate invocations. Stopping removes the file and yields
//! the elapsed whole seconds, which the caller stores as a time entry.

use super::data_storage::DataStorage;
use crate::libs::error::{TrackerError, TrackerResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const TIMER_FILE_NAME: &str = "timer.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningTimer {
    pub workitem: String,
    pub desc: String,
    pub started_at: NaiveDateTime,
}

impl RunningTimer {
    /// Whole seconds since start; a clock that went backwards counts as zero.
    pub fn elapsed(&self, now: NaiveDateTime) -> u64 {
        u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0)
    }
}

pub struct Timer {
    path: PathBuf,
}

impl Timer {
    /// Timer backed by the default data directory.
    pub fn new() -> TrackerResult<Self> {
        Ok(Self::at(&DataStorage::new().get_path(TIMER_FILE_NAME)?))
    }

    pub fn at(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }

    pub fn current(&self) -> TrackerResult<Option<RunningTimer>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Starts a timer. The description must not be blank and no other timer
    /// may be running.
    pub fn start(&self, workitem: &str, desc: &str, now: NaiveDateTime) -> TrackerResult<RunningTimer> {
        let desc = desc.trim();
        if desc.is_empty() {
            return Err(TrackerError::Timer("a description is required to start a timer".to_string()));
        }
        if let Some(running) = self.current()? {
            return Err(TrackerError::Timer(format!(
                "a timer is already running for '{}' since {}",
                running.workitem, running.started_at
            )));
        }

        let timer = RunningTimer {
            workitem: workitem.to_string(),
            desc: desc.to_string(),
            started_at: now,
        };
        fs::write(&self.path, serde_json::to_string_pretty(&timer)?)?;
        debug!(workitem, path = %self.path.display(), "timer started");

        Ok(timer)
    }

    /// Stops the running timer and returns it with its elapsed seconds.
    pub fn stop(&self, now: NaiveDateTime) -> TrackerResult<(RunningTimer, u64)> {
        let timer = self
            .current()?
            .ok_or_else(|| TrackerError::Timer("no timer is running".to_string()))?;
        fs::remove_file(&self.path)?;
        let elapsed = timer.elapsed(now);
        debug!(workitem = %timer.workitem, elapsed, "timer stopped");

        Ok((timer, elapsed))
    }

    /// Drops the running timer without recording anything.
    pub fn cancel(&self) -> TrackerResult<Option<RunningTimer>> {
        let timer = self.current()?;
        if timer.is_some() {
            fs::remove_file(&self.path)?;
        }
        Ok(timer)
    }
}
