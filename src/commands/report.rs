//! Console report of a day's recorded segments.

use crate::db::segments::SegmentsDb;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::segment::SegmentKind;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Date to report on (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let segments = SegmentsDb::new()?.fetch_date(date)?;

    if segments.is_empty() {
        msg_info!(Message::NoSegmentsForDate(date.to_string()));
        return Ok(());
    }

    msg_print!(Message::ReportHeader(date.to_string()), true);
    View::segments(&segments)?;

    let mut working_total = Duration::zero();
    let mut idle_total = Duration::zero();
    for segment in &segments {
        match segment.kind {
            SegmentKind::Working => working_total = working_total + segment.duration(),
            SegmentKind::Idle => idle_total = idle_total + segment.duration(),
        }
    }
    msg_print!(
        Message::ReportTotals(format_duration(&working_total), format_duration(&idle_total)),
        true
    );

    Ok(())
}

pub(crate) fn parse_date(date: &Option<String>) -> Result<NaiveDate> {
    match date {
        Some(value) => {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(value.clone())))
        }
        None => Ok(Local::now().date_naive()),
    }
}
