//! Report command: Toggl time entries in, SGU CSV out.
//!
//! The steps run strictly one after another:
//!
//! 1. **Configuration**: Read `TOGGL_KEY` and `SGU_USER`
//! 2. **Projects**: Fetch the user, then the workspace projects
//! 3. **Time Entries**: Fetch the entries between the two dates
//! 4. **Mapping**: Convert every entry into an SGU row
//! 5. **Grouping**: Sum hours of rows sharing project, date and activity
//! 6. **Export**: Write `report-YYYYMMDD.csv`
//!
//! Any failure aborts the run before the report file is created, so a
//! partial report is never written.

use crate::{
    api::toggl::{Toggl, TogglConfig},
    libs::{config::Config, export::Exporter, messages::Message, report::group_entries, sgu::SguEntry},
    msg_debug,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Start date in YYYY-MM-DD format
    #[arg(long, default_value = "")]
    pub start_date: String,

    /// End date in YYYY-MM-DD format
    #[arg(long, default_value = "")]
    pub end_date: String,
}

impl ReportArgs {
    /// Both dates are required; their format is left for Toggl to validate.
    pub fn has_dates(&self) -> bool {
        !self.start_date.is_empty() && !self.end_date.is_empty()
    }
}

/// Runs the report against the public Toggl API, writing to the default
/// report path.
pub async fn cmd(args: ReportArgs, config: &Config) -> Result<()> {
    run(&args, config, &TogglConfig::new(&config.toggl_key), None).await
}

/// Runs the full pipeline with explicit settings.
///
/// `output_path` overrides the default `report-YYYYMMDD.csv` location.
pub async fn run(args: &ReportArgs, config: &Config, toggl_config: &TogglConfig, output_path: Option<PathBuf>) -> Result<()> {
    let toggl = Toggl::new(toggl_config);
    let projects = toggl.get_project_map().await?;
    let time_entries = toggl.get_time_entries(&args.start_date, &args.end_date).await?;

    let entries = time_entries
        .iter()
        .map(|entry| SguEntry::from_toggl_entry(entry, &projects, &config.sgu_user))
        .collect::<Result<Vec<_>>>()?;

    let count = entries.len();
    let grouped = group_entries(entries);
    msg_debug!(Message::EntriesGrouped {
        entries: count,
        rows: grouped.len()
    });

    Exporter::new(output_path).export(&grouped)
}
