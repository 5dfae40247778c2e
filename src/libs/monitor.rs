//! The activity segmentation engine.
//!
//! Converts the input-activity stream and window-focus samples into a
//! sequence of non-overlapping Working/Idle segments. The engine evaluates
//! one synchronous state transition per tick at a fixed cadence; every
//! closed segment is handed to the sink before the tick returns, so a
//! reader of the store never observes a new segment ahead of the close
//! that precedes it.

use crate::db::segments::SegmentsDb;
use crate::libs::activity::{spawn_input_listener, ActivityTracker};
use crate::libs::backup::BackupScheduler;
use crate::libs::config::MonitorConfig;
use crate::libs::messages::Message;
use crate::libs::segment::Segment;
use crate::libs::sheet::{DailySheet, RetryPolicy, SaveOutcome};
use crate::libs::window::WindowSampler;
use crate::{msg_debug, msg_error, msg_error_anyhow, msg_info};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use std::path::PathBuf;

/// Destination for closed segments.
///
/// `append` must resolve (or exhaust its own retries) before returning;
/// the engine relies on that to preserve close-before-open ordering in
/// the store.
pub trait SegmentSink {
    /// Creates the day's store if absent. Idempotent.
    fn prepare_day(&mut self, date: NaiveDate) -> Result<()>;

    /// Durably appends one closed segment.
    fn append(&mut self, segment: &Segment) -> Result<()>;
}

/// Production sink: rows go to SQLite, then the day's spreadsheet is
/// re-materialized from the full row set and saved under the lock-retry
/// policy. A save that exhausts its retries leaves the row in SQLite, so
/// the next successful append restores it to the spreadsheet.
pub struct StoreSink {
    db: SegmentsDb,
    activity_dir: PathBuf,
    login: String,
    retry: RetryPolicy,
}

impl StoreSink {
    pub fn new(activity_dir: PathBuf, login: String) -> Result<Self> {
        Ok(StoreSink {
            db: SegmentsDb::new()?,
            activity_dir,
            login,
            retry: RetryPolicy::default(),
        })
    }

    fn materialize(&mut self, date: NaiveDate) -> Result<()> {
        let rows = self.db.fetch_date(date)?;
        let sheet = DailySheet::new(&self.activity_dir, &self.login, date, self.retry.clone());
        match sheet.write(&rows)? {
            SaveOutcome::Saved => Ok(()),
            SaveOutcome::Exhausted => Err(msg_error_anyhow!(Message::StoreSaveExhausted(sheet.path().display().to_string()))),
        }
    }
}

impl SegmentSink for StoreSink {
    fn prepare_day(&mut self, date: NaiveDate) -> Result<()> {
        let sheet = DailySheet::new(&self.activity_dir, &self.login, date, self.retry.clone());
        if sheet.path().exists() {
            return Ok(());
        }
        self.materialize(date)
    }

    fn append(&mut self, segment: &Segment) -> Result<()> {
        let date = segment.start.date();
        self.db.insert(date, segment)?;
        self.materialize(date)
    }
}

/// Mutable engine state, living for the process lifetime.
///
/// At most one of `idle_start` / `current_window` is set at any instant:
/// the engine is either inside an open Idle span, inside an open Working
/// span, or (only before the first tick attributes anything) in neither.
#[derive(Debug, Clone)]
pub struct EngineState {
    pub current_date: NaiveDate,
    pub idle_start: Option<NaiveDateTime>,
    pub current_window: Option<String>,
    pub segment_start: NaiveDateTime,
}

impl EngineState {
    fn new(started_at: NaiveDateTime) -> Self {
        EngineState {
            current_date: started_at.date(),
            idle_start: None,
            current_window: None,
            segment_start: started_at,
        }
    }
}

/// The segmentation engine and its poll loop.
pub struct Monitor<S: SegmentSink> {
    config: MonitorConfig,
    tracker: ActivityTracker,
    sampler: Box<dyn WindowSampler>,
    sink: S,
    backup: BackupScheduler,
    state: EngineState,
}

impl<S: SegmentSink> Monitor<S> {
    pub fn new(
        config: MonitorConfig,
        tracker: ActivityTracker,
        sampler: Box<dyn WindowSampler>,
        sink: S,
        backup: BackupScheduler,
        started_at: NaiveDateTime,
    ) -> Self {
        Monitor {
            config,
            tracker,
            sampler,
            sink,
            backup,
            state: EngineState::new(started_at),
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Runs the main monitoring loop.
    ///
    /// Spawns the input listener, then evaluates one tick per poll
    /// interval against the wall clock until the task is dropped.
    pub async fn run(&mut self) -> Result<()> {
        msg_info!(Message::MonitorStarted {
            idle_threshold: self.config.idle_threshold,
            poll_interval: self.config.poll_interval,
            backup_interval: self.config.backup_interval,
        });

        spawn_input_listener(&self.tracker);

        if let Err(e) = self.sink.prepare_day(self.state.current_date) {
            msg_error!(Message::StoreInitFailed(e.to_string()));
        }

        loop {
            let now = Local::now().naive_local();
            self.tick(now);
            tokio::time::sleep(std::time::Duration::from_millis(self.config.poll_interval)).await;
        }
    }

    /// Evaluates one state transition at the given instant.
    ///
    /// All failures are absorbed here: persistence errors drop the
    /// affected row, never the loop.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.rollover(now);

        let idle_threshold = Duration::seconds(self.config.idle_threshold as i64);
        let elapsed = self.tracker.time_since_last_activity(now);

        if elapsed < idle_threshold {
            // Activity is recent. Leave Idle first, then track the window.
            let was_idle = self.state.idle_start.take();
            if let Some(idle_start) = was_idle {
                self.emit(Segment::idle(idle_start, now));
            }

            let title = self.sampler.active_window_title();
            if self.state.current_window.as_deref() != Some(title.as_str()) {
                if let Some(previous) = self.state.current_window.take() {
                    self.emit(Segment::working(previous, self.state.segment_start, now));
                    self.state.segment_start = now;
                } else if was_idle.is_some() {
                    self.state.segment_start = now;
                }
                // Neither branch taken: first tick of a run or a rollover
                // continuation, where segment_start already holds the open
                // segment's start.
                self.state.current_window = Some(title);
            }
        } else if self.state.idle_start.is_none() {
            if let Some(previous) = self.state.current_window.take() {
                self.emit(Segment::working(previous, self.state.segment_start, now));
            }
            self.state.idle_start = Some(now);
        }

        self.backup.maybe_backup(now, self.state.current_date);
    }

    /// Advances `current_date` across a day boundary: the open segment is
    /// closed at end-of-previous-day and re-opened from midnight in the
    /// same mode. Running twice for the same transition is a no-op.
    fn rollover(&mut self, now: NaiveDateTime) {
        if now.date() == self.state.current_date {
            return;
        }

        let end_of_day = self.state.current_date.and_hms_milli_opt(23, 59, 59, 999).unwrap();
        if let Some(idle_start) = self.state.idle_start {
            self.emit(Segment::idle(idle_start, end_of_day));
        } else if let Some(previous) = self.state.current_window.take() {
            self.emit(Segment::working(previous, self.state.segment_start, end_of_day));
        }

        self.state.current_date = now.date();
        let day_start = self.state.current_date.and_hms_opt(0, 0, 0).unwrap();
        if self.state.idle_start.is_some() {
            // Idle continues seamlessly from midnight.
            self.state.idle_start = Some(day_start);
        }
        // A continuing Working span resumes from midnight once the active
        // branch re-samples the title in this same tick.
        self.state.segment_start = day_start;

        if let Err(e) = self.sink.prepare_day(self.state.current_date) {
            msg_error!(Message::StoreInitFailed(e.to_string()));
        }
    }

    fn emit(&mut self, segment: Segment) {
        msg_debug!(Message::SegmentRecorded(segment.kind.to_string(), segment.subject.clone()));
        if let Err(e) = self.sink.append(&segment) {
            msg_error!(Message::SegmentPersistFailed(e.to_string()));
        }
    }
}
