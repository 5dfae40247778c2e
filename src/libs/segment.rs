//! The time-segment data model produced by the segmentation engine.

use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// Subject recorded for Idle rows, where no window title applies.
pub const IDLE_SUBJECT: &str = "Idle Hours";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Working,
    Idle,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A contiguous span of time labeled Working or Idle. Working segments
/// carry the focused window title as their subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub subject: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Segment {
    pub fn working(subject: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Segment {
            kind: SegmentKind::Working,
            subject: subject.into(),
            start,
            end,
        }
    }

    pub fn idle(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Segment {
            kind: SegmentKind::Idle,
            subject: IDLE_SUBJECT.to_string(),
            start,
            end,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }
}
