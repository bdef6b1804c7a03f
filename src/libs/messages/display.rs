//! Display implementation for toggl2sgu application messages.
//!
//! All user-facing text lives here, so the rest of the crate only deals in
//! `Message` variants and never formats prose inline.
//!
//! ```rust
//! use toggl2sgu::libs::messages::Message;
//!
//! let message = Message::WritingFile("report-20240305.csv".to_string());
//! assert_eq!(message.to_string(), "Writing to file: report-20240305.csv");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::DatesRequired => "Both --start-date and --end-date must be provided.".to_string(),

            // === TOGGL MESSAGES ===
            Message::FetchingUser => "Fetching user data".to_string(),
            Message::FetchingProjects => "Fetching projects".to_string(),
            Message::FetchingTimeEntries { start, end } => format!("Fetching time entries from {} to {}", start, end),
            Message::TogglRequestFailed(endpoint) => format!("Failed to perform request to {}", endpoint),
            Message::TogglDecodeFailed(endpoint) => format!("Failed to decode response body from {}", endpoint),
            Message::TimeEntriesFetched(count) => format!("Fetched {} time entries", count),
            Message::ProjectsFetched(count) => format!("Fetched {} projects", count),

            // === MAPPING MESSAGES ===
            Message::EntryWithoutTags(id) => format!("Time entry {} has no tags, category left empty", id),
            Message::RunningEntry(id) => format!("Time entry {} is still running, duration is negative", id),
            Message::EntriesGrouped { entries, rows } => format!("Grouped {} entries into {} rows", entries, rows),

            // === EXPORT MESSAGES ===
            Message::WritingFile(path) => format!("Writing to file: {}", path),
            Message::FileCreateFailed(path) => format!("Failed to create file: {}", path),
            Message::HeaderWriteFailed => "Failed to write header".to_string(),
            Message::RecordWriteFailed => "Failed to write record".to_string(),
            Message::ReportWritten { path, rows } => format!("Report with {} row(s) written to {}", rows, path),
        };
        write!(f, "{}", text)
    }
}
