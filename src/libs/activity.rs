//! Input-driven activity tracking.
//!
//! A dedicated OS thread listens for keyboard, mouse, and scroll events
//! with rdev and pushes a stamp through a channel; a consumer task updates
//! the shared last-activity timestamp the engine reads once per tick. The
//! channel keeps the synchronization surface to a single writer.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use chrono::{Duration, Local, NaiveDateTime};
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Shared record of when user input was last observed.
///
/// Writes come from the listener's consumer task; the engine loop is the
/// only reader. A read concurrent with a write returns either the old or
/// the new timestamp, never a torn value.
#[derive(Clone)]
pub struct ActivityTracker {
    last_activity: Arc<Mutex<NaiveDateTime>>,
}

impl ActivityTracker {
    pub fn new(now: NaiveDateTime) -> Self {
        ActivityTracker {
            last_activity: Arc::new(Mutex::new(now)),
        }
    }

    /// Stamps the current wall-clock time as the last activity.
    pub fn record_activity(&self) {
        self.record_activity_at(Local::now().naive_local());
    }

    /// Stamps an explicit timestamp. The watch loop never calls this
    /// directly; it exists for driving the engine with a synthetic clock.
    pub fn record_activity_at(&self, now: NaiveDateTime) {
        *self.last_activity.lock() = now;
    }

    pub fn last_activity(&self) -> NaiveDateTime {
        *self.last_activity.lock()
    }

    pub fn time_since_last_activity(&self, now: NaiveDateTime) -> Duration {
        now.signed_duration_since(self.last_activity())
    }
}

/// Spawns the input listener thread and its consumer task.
///
/// rdev's listener blocks its thread for the process lifetime and is
/// restarted on error. Every input event collapses to a unit stamp on the
/// channel; payloads are irrelevant, only that an event occurred.
pub fn spawn_input_listener(tracker: &ActivityTracker) {
    let (tx, mut rx) = mpsc::unbounded_channel::<()>();

    std::thread::spawn(move || loop {
        let tx = tx.clone();
        if let Err(e) = listen(move |event: Event| match event.event_type {
            EventType::KeyPress(_) | EventType::ButtonPress(_) | EventType::MouseMove { .. } | EventType::Wheel { .. } => {
                let _ = tx.send(());
            }
            _ => {}
        }) {
            msg_error!(Message::ActivityListenerFailed(format!("{:?}", e)));
            std::thread::sleep(std::time::Duration::from_secs(1));
        } else {
            // listen only returns without error if the hook was torn down
            break;
        }
    });

    let tracker = tracker.clone();
    tokio::spawn(async move {
        while rx.recv().await.is_some() {
            tracker.record_activity();
        }
        msg_debug!(Message::ActivityChannelClosed);
    });
}
