//! Database layer for the actilog application.
//!
//! SQLite is the durable row store behind the daily spreadsheets: every
//! closed segment is inserted here first, and the day's `.xlsx` file is
//! re-materialized from these rows. This keeps the spreadsheet intact
//! across process restarts mid-day.

pub mod db;
pub mod segments;
