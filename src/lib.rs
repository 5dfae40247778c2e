//! # Actilog - Personal Activity Logger
//!
//! A background utility that watches user input and the focused window,
//! classifies time as Working or Idle, and appends every completed time
//! segment to a daily spreadsheet log.
//!
//! ## Features
//!
//! - **Activity Monitoring**: Input-driven detection of Working and Idle spans
//! - **Window Attribution**: Working time is attributed to the focused window title
//! - **Daily Spreadsheet Log**: One `.xlsx` file per day with a fixed row schema
//! - **Periodic Backups**: The current day's log is copied on a fixed interval
//! - **Console Reports**: Daily segment tables and CSV/JSON export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use actilog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
