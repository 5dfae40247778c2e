use crate::db::db::Db;
use crate::libs::segment::{Segment, SegmentKind};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;

// Timestamps keep their fractional part so the end-of-day sentinel
// (23:59:59.999) round-trips exactly.
const STORE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const SCHEMA_SEGMENTS: &str = "CREATE TABLE IF NOT EXISTS segments (
    id INTEGER PRIMARY KEY,
    date DATE NOT NULL,
    kind TEXT NOT NULL,
    subject TEXT NOT NULL,
    start TIMESTAMP NOT NULL,
    end TIMESTAMP NOT NULL
);";
const INSERT_SEGMENT: &str = "INSERT INTO segments (date, kind, subject, start, end) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_BY_DATE: &str = "SELECT kind, subject, start, end FROM segments WHERE date = ?1 ORDER BY start, id";

pub struct SegmentsDb {
    conn: Connection,
}

impl SegmentsDb {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_SEGMENTS, [])?;
        Ok(SegmentsDb { conn: db.conn })
    }

    pub fn insert(&mut self, date: NaiveDate, segment: &Segment) -> Result<()> {
        self.conn.execute(
            INSERT_SEGMENT,
            [
                &date.format("%Y-%m-%d").to_string(),
                &segment.kind.to_string(),
                &segment.subject,
                &segment.start.format(STORE_TIMESTAMP_FORMAT).to_string(),
                &segment.end.format(STORE_TIMESTAMP_FORMAT).to_string(),
            ],
        )?;
        Ok(())
    }

    pub fn fetch_date(&mut self, date: NaiveDate) -> Result<Vec<Segment>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let mut stmt = self.conn.prepare(SELECT_BY_DATE)?;
        let segment_iter = stmt.query_map([&date_str], |row| {
            let kind = match row.get::<_, String>(0)?.as_str() {
                "Idle" => SegmentKind::Idle,
                _ => SegmentKind::Working,
            };
            Ok(Segment {
                kind,
                subject: row.get(1)?,
                start: NaiveDateTime::parse_from_str(&row.get::<_, String>(2)?, STORE_TIMESTAMP_FORMAT).unwrap(),
                end: NaiveDateTime::parse_from_str(&row.get::<_, String>(3)?, STORE_TIMESTAMP_FORMAT).unwrap(),
            })
        })?;
        let mut segments = Vec::new();
        for segment in segment_iter {
            segments.push(segment?);
        }
        Ok(segments)
    }
}
