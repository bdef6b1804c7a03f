//! CSV export of the aggregated SGU report.
//!
//! ## File Layout
//!
//! - **Name**: `report-YYYYMMDD.csv`, dated with the day the report is created
//! - **Location**: current working directory, overwritten if present
//! - **Delimiter**: `;`
//! - **Header**: `DATA;PROJETO;CATEGORIA;ATIVIDADE;CARD_KEY;HORAS;USERNAME`
//! - **Hours**: rounded up to five decimals with a decimal comma
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toggl2sgu::libs::export::Exporter;
//!
//! # fn run(rows: &[toggl2sgu::libs::sgu::SguEntry]) -> anyhow::Result<()> {
//! let exporter = Exporter::new(None);
//! exporter.export(rows)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::formatter::format_hours;
use crate::libs::messages::Message;
use crate::libs::sgu::SguEntry;
use crate::{msg_info, msg_success};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column names of the SGU report, in output order.
pub const SGU_HEADER: [&str; 7] = ["DATA", "PROJETO", "CATEGORIA", "ATIVIDADE", "CARD_KEY", "HORAS", "USERNAME"];

const SGU_DELIMITER: u8 = b';';

/// Writes SGU rows to a CSV file.
pub struct Exporter {
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter for `output_path`, or for today's
    /// `report-YYYYMMDD.csv` in the working directory when `None`.
    pub fn new(output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(Self::default_path);
        Self { output_path }
    }

    /// Default report file name for today's date.
    pub fn default_path() -> PathBuf {
        PathBuf::from(format!("report-{}.csv", Local::now().format("%Y%m%d")))
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Creates (or truncates) the output file and writes the report to it.
    pub fn export(&self, entries: &[SguEntry]) -> Result<()> {
        let path = self.output_path.display().to_string();
        msg_info!(Message::WritingFile(path.clone()));

        let file = File::create(&self.output_path).with_context(|| Message::FileCreateFailed(path.clone()))?;
        write_entries(file, entries)?;

        msg_success!(Message::ReportWritten {
            path,
            rows: entries.len()
        });
        Ok(())
    }
}

/// Serializes the header and one record per row into `writer`.
///
/// The writer is flushed before returning so that buffered write errors are
/// reported rather than lost on drop.
pub fn write_entries<W: Write>(writer: W, entries: &[SguEntry]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().delimiter(SGU_DELIMITER).from_writer(writer);

    wtr.write_record(SGU_HEADER).context(Message::HeaderWriteFailed)?;
    for entry in entries {
        let hours = format_hours(entry.hours);
        wtr.write_record([
            entry.date.as_str(),
            entry.project.as_str(),
            entry.category.as_str(),
            entry.activity.as_str(),
            entry.card_key.as_str(),
            hours.as_str(),
            entry.user_name.as_str(),
        ])
        .context(Message::RecordWriteFailed)?;
    }
    wtr.flush().context(Message::RecordWriteFailed)?;
    Ok(())
}
