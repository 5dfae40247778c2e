//! Interval-gated backups of the current day's store.

use crate::libs::messages::Message;
use crate::libs::sheet::{backup_path, sheet_path};
use crate::{msg_info, msg_warning};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fs;
use std::path::PathBuf;

pub struct BackupScheduler {
    activity_dir: PathBuf,
    backup_dir: PathBuf,
    login: String,
    interval: Duration,
    last_backup: NaiveDateTime,
}

impl BackupScheduler {
    pub fn new(activity_dir: PathBuf, backup_dir: PathBuf, login: String, interval_minutes: u64, started_at: NaiveDateTime) -> Self {
        BackupScheduler {
            activity_dir,
            backup_dir,
            login,
            interval: Duration::minutes(interval_minutes as i64),
            last_backup: started_at,
        }
    }

    /// Copies the current day's store to the backup directory when the
    /// backup interval has elapsed.
    ///
    /// The timer advances whether or not the copy succeeds, so a missing
    /// or locked source is retried no sooner than the next interval.
    pub fn maybe_backup(&mut self, now: NaiveDateTime, date: NaiveDate) {
        if now.signed_duration_since(self.last_backup) < self.interval {
            return;
        }
        self.last_backup = now;

        match self.copy_current(date) {
            Ok(path) => msg_info!(Message::BackupCreated(path.display().to_string())),
            Err(e) => msg_warning!(Message::BackupFailed(e.to_string())),
        }
    }

    pub fn last_backup(&self) -> NaiveDateTime {
        self.last_backup
    }

    fn copy_current(&self, date: NaiveDate) -> Result<PathBuf> {
        fs::create_dir_all(&self.backup_dir)?;
        let source = sheet_path(&self.activity_dir, &self.login, date);
        let destination = backup_path(&self.backup_dir, &self.login, date);
        fs::copy(&source, &destination)?;
        Ok(destination)
    }
}
