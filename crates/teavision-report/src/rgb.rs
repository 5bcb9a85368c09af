//! RGB analysis CSV exports

use std::io::Write;

use chrono::NaiveDate;
use teavision_pixel::ChannelMeans;

use crate::error::ReportResult;

/// One image in an RGB analysis batch. `means` is `None` for images that
/// have not been analyzed yet; their cells are left blank.
#[derive(Clone, Debug, PartialEq)]
pub struct RgbReportRow {
    pub file_name: String,
    pub means: Option<ChannelMeans>,
}

impl RgbReportRow {
    pub fn new(file_name: impl Into<String>, means: Option<ChannelMeans>) -> Self {
        Self {
            file_name: file_name.into(),
            means,
        }
    }
}

/// Write an RGB analysis batch as CSV. Every cell is quoted; means are
/// rendered with two decimals.
pub fn write_rgb_report<W: Write>(writer: W, rows: &[RgbReportRow]) -> ReportResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(["Filename", "R_Mean", "G_Mean", "B_Mean"])?;

    for row in rows {
        match &row.means {
            Some(means) => {
                let r = format!("{:.2}", means.r);
                let g = format!("{:.2}", means.g);
                let b = format!("{:.2}", means.b);
                csv_writer.write_record([row.file_name.as_str(), r.as_str(), g.as_str(), b.as_str()])?;
            }
            None => csv_writer.write_record([row.file_name.as_str(), "", "", ""])?,
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Download filename for an RGB analysis export, stamped `YYYY-MM-DD`.
pub fn rgb_report_filename(date: NaiveDate) -> String {
    format!("rgb_analysis_{}.csv", date.format("%Y-%m-%d"))
}
