//! Export of recorded segments for external analysis.
//!
//! The daily spreadsheet is already the primary store; this command covers
//! the machine-readable formats.

use super::report::parse_date;
use crate::db::segments::SegmentsDb;
use crate::libs::formatter::{format_total_duration, TIMESTAMP_FORMAT};
use crate::libs::messages::Message;
use crate::libs::segment::Segment;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet tools
    Csv,
    /// Pretty-printed JSON for programmatic processing
    Json,
}

/// Serializable row mirroring the daily store's schema.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSegment {
    pub activity_type: String,
    pub subject: String,
    pub start: String,
    pub end: String,
    pub duration: String,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    format: ExportFormat,

    /// Date to export (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,

    /// Output file path, defaults to actilog_{date}.{ext}
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let segments = SegmentsDb::new()?.fetch_date(date)?;

    let extension = match args.format {
        ExportFormat::Csv => "csv",
        ExportFormat::Json => "json",
    };
    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("actilog_{}.{}", date.format("%Y-%m-%d"), extension)));

    let rows: Vec<ExportSegment> = segments.iter().map(to_export_row).collect();

    match args.format {
        ExportFormat::Csv => export_csv(&output_path, &rows)?,
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(&rows)?;
            File::create(&output_path)?.write_all(json.as_bytes())?;
        }
    }

    msg_success!(Message::ExportCompleted(output_path.display().to_string()));
    Ok(())
}

fn to_export_row(segment: &Segment) -> ExportSegment {
    ExportSegment {
        activity_type: segment.kind.to_string(),
        subject: segment.subject.clone(),
        start: segment.start.format(TIMESTAMP_FORMAT).to_string(),
        end: segment.end.format(TIMESTAMP_FORMAT).to_string(),
        duration: format_total_duration(&segment.duration()),
    }
}

fn export_csv(path: &PathBuf, rows: &[ExportSegment]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["ActivityType", "Subject", "Start", "End", "Duration"])?;

    for row in rows {
        wtr.write_record([&row.activity_type, &row.subject, &row.start, &row.end, &row.duration])?;
    }

    wtr.flush()?;
    Ok(())
}
