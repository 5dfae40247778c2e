//! The daily spreadsheet store.
//!
//! One `.xlsx` file per calendar day, keyed by login name and date. The
//! file carries an `Activity Log` sheet with a fixed header schema plus a
//! reserved `Summary` sheet. A human may keep the file open in a viewer
//! while the monitor runs, so saves contend with an external lock and go
//! through a bounded retry policy.

use crate::libs::formatter::{format_total_duration, TIMESTAMP_FORMAT};
use crate::libs::messages::Message;
use crate::libs::segment::Segment;
use crate::msg_warning;
use anyhow::Result;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

pub const SHEET_NAME: &str = "Activity Log";
pub const SUMMARY_SHEET_NAME: &str = "Summary";
pub const SUMMARY_RESERVED_LABEL: &str = "Idle Hours";
pub const HEADERS: [&str; 6] = ["LoginName", "ActivitySubject", "ActivityType", "StartTime", "EndTime", "TotalDuration"];
const BACKUP_SUFFIX: &str = "_backup";

/// Bounded retry policy for saving a store that may be locked by a viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    /// 5 attempts spaced 5 seconds apart.
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

/// Outcome of a save under the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Exhausted,
}

/// File name of a day's store: `{login}_{YYYY-MM-DD}.xlsx`.
pub fn sheet_file_name(login: &str, date: NaiveDate) -> String {
    format!("{}_{}.xlsx", login, date.format("%Y-%m-%d"))
}

/// Full path of a day's store inside the activity directory.
pub fn sheet_path(activity_dir: &Path, login: &str, date: NaiveDate) -> PathBuf {
    activity_dir.join(sheet_file_name(login, date))
}

/// Full path of a day's backup copy: the store file name with a fixed
/// suffix inserted before the extension, inside the backup directory.
pub fn backup_path(backup_dir: &Path, login: &str, date: NaiveDate) -> PathBuf {
    backup_dir.join(format!("{}_{}{}.xlsx", login, date.format("%Y-%m-%d"), BACKUP_SUFFIX))
}

/// Writer for one day's spreadsheet.
pub struct DailySheet {
    path: PathBuf,
    login: String,
    retry: RetryPolicy,
}

impl DailySheet {
    pub fn new(activity_dir: &Path, login: &str, date: NaiveDate, retry: RetryPolicy) -> Self {
        DailySheet {
            path: sheet_path(activity_dir, login, date),
            login: login.to_string(),
            retry,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the full day's workbook (header plus one row per segment)
    /// and saves it under the retry policy.
    ///
    /// The workbook is rebuilt from scratch on every write because the
    /// xlsx writer cannot append to an existing file; callers pass the
    /// complete row set for the day.
    pub fn write(&self, segments: &[Segment]) -> Result<SaveOutcome> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut workbook = Workbook::new();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, segment) in segments.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &self.login)?;
            worksheet.write_string(row, 1, &segment.subject)?;
            worksheet.write_string(row, 2, &segment.kind.to_string())?;
            worksheet.write_string(row, 3, &segment.start.format(TIMESTAMP_FORMAT).to_string())?;
            worksheet.write_string(row, 4, &segment.end.format(TIMESTAMP_FORMAT).to_string())?;
            worksheet.write_string(row, 5, &format_total_duration(&segment.duration()))?;
        }

        worksheet.autofit();

        // Reserved for a daily idle-hours summary, not populated here.
        let summary = workbook.add_worksheet();
        summary.set_name(SUMMARY_SHEET_NAME)?;
        summary.write_string(0, 0, SUMMARY_RESERVED_LABEL)?;

        self.save_with_retry(&mut workbook)
    }

    fn save_with_retry(&self, workbook: &mut Workbook) -> Result<SaveOutcome> {
        for attempt in 1..=self.retry.max_attempts {
            match workbook.save(&self.path) {
                Ok(()) => return Ok(SaveOutcome::Saved),
                Err(_) => {
                    msg_warning!(Message::StoreLocked {
                        path: self.path.display().to_string(),
                        attempt,
                        max_attempts: self.retry.max_attempts,
                    });
                    if attempt < self.retry.max_attempts {
                        thread::sleep(self.retry.delay);
                    }
                }
            }
        }
        Ok(SaveOutcome::Exhausted)
    }
}
