//! # toggl2sgu - Toggl Track to SGU timesheet converter
//!
//! A command-line utility that pulls time entries from Toggl Track and
//! turns them into the semicolon-delimited CSV report expected by SGU.
//!
//! ## Features
//!
//! - **Toggl Client**: Fetches the current user, projects and time entries
//! - **Entry Mapping**: Converts Toggl entries into SGU rows, extracting card keys
//! - **Aggregation**: Sums hours of rows sharing project, date and activity
//! - **CSV Export**: Writes `report-YYYYMMDD.csv` with decimal-comma hours
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toggl2sgu::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
