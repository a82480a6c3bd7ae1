use crate::error::Result;
use crate::roster::OperatorGroups;
use crate::OutputFormat;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

pub const EXPORT_COLUMNS: [&str; 5] = ["Operator", "Date", "Service", "Duration", "Guest"];

pub struct CsvConfig {
    pub format: OutputFormat,
}

/// Write the grouped records as a flat table: a column-header row, then
/// one row per record, operators in roster order. Every field is quoted;
/// embedded quotes are doubled.
pub fn write_groups<W: Write>(
    groups: &OperatorGroups,
    writer: W,
    config: &CsvConfig,
) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(config.format.delimiter())
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(EXPORT_COLUMNS)?;

    for (_, records) in groups.iter() {
        for record in records {
            let date = record.date.format("%Y-%m-%d").to_string();
            csv_writer.write_record([
                record.operator.as_str(),
                date.as_str(),
                record.service.as_str(),
                record.duration.as_str(),
                record.guest.as_str(),
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
