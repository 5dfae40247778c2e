use crate::libs::formatter::format_total_duration;
use crate::libs::segment::Segment;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn segments(segments: &Vec<Segment>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "TYPE", "SUBJECT", "START", "END", "DURATION"]);
        for (index, segment) in segments.iter().enumerate() {
            table.add_row(row![
                index + 1,
                segment.kind,
                segment.subject,
                segment.start.format("%H:%M:%S"),
                segment.end.format("%H:%M:%S"),
                format_total_duration(&segment.duration())
            ]);
        }
        table.printstd();

        Ok(())
    }
}
