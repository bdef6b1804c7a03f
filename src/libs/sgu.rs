//! SGU report rows and their construction from Toggl time entries.
//!
//! ## Mapping Rules
//!
//! | SGU field  | Source                                                    |
//! |------------|-----------------------------------------------------------|
//! | `date`     | entry start, reformatted to `DD/MM/YYYY`                  |
//! | `project`  | project name looked up by id, empty when unknown          |
//! | `category` | first tag of the entry, empty when the entry has no tags  |
//! | `activity` | description with the card key removed and trimmed         |
//! | `card_key` | `#ABC-123` style key found in the description, sans `#`   |
//! | `hours`    | duration in seconds / 3600, unrounded                     |
//! | `user_name`| `SGU_USER` from the run configuration                     |
//!
//! ```rust
//! use toggl2sgu::libs::sgu::extract_card_key;
//!
//! let (activity, card_key) = extract_card_key("Fix login bug #ABC-123");
//! assert_eq!(activity, "Fix login bug");
//! assert_eq!(card_key, "ABC-123");
//! ```

use crate::api::toggl::TimeEntry;
use crate::libs::error::ReportError;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Output format of the report date column.
pub const SGU_DATE_FORMAT: &str = "%d/%m/%Y";

const SECONDS_PER_HOUR: f64 = 3600.0;

static CARD_KEY_RE: OnceLock<Regex> = OnceLock::new();

fn card_key_re() -> &'static Regex {
    CARD_KEY_RE.get_or_init(|| Regex::new(r"#[A-Za-z]+-[0-9]+").expect("card key pattern is valid"))
}

/// One line of the SGU report.
#[derive(Debug, Clone, PartialEq)]
pub struct SguEntry {
    pub date: String,
    pub project: String,
    pub category: String,
    pub activity: String,
    pub card_key: String,
    pub hours: f64,
    pub user_name: String,
}

impl SguEntry {
    /// Converts a Toggl time entry into an SGU row.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidStartDate`] when the start timestamp is
    /// not a valid RFC 3339 date-time, and [`ReportError::StartDateSeparator`]
    /// when its date and time are joined by anything but `T`.
    pub fn from_toggl_entry(entry: &TimeEntry, projects: &HashMap<i64, String>, user_name: &str) -> Result<Self> {
        let date = parse_start(&entry.start)?;

        let project = entry
            .project_id
            .and_then(|id| projects.get(&id).cloned())
            .unwrap_or_default();

        let category = match entry.tags.as_deref().and_then(|tags| tags.first()) {
            Some(tag) => tag.clone(),
            None => {
                msg_warning!(Message::EntryWithoutTags(entry.id));
                String::new()
            }
        };

        if entry.duration < 0 {
            msg_debug!(Message::RunningEntry(entry.id));
        }

        let (activity, card_key) = extract_card_key(entry.description.as_deref().unwrap_or_default());

        Ok(Self {
            date: date.format(SGU_DATE_FORMAT).to_string(),
            project,
            category,
            activity,
            card_key,
            hours: entry.duration as f64 / SECONDS_PER_HOUR,
            user_name: user_name.to_string(),
        })
    }
}

/// Parses an ISO 8601 start timestamp such as `2024-03-05T14:30:00Z`.
///
/// The date and time must be joined by `T`. chrono alone also accepts a
/// space or a lowercase `t` there.
fn parse_start(raw: &str) -> Result<DateTime<FixedOffset>, ReportError> {
    let date = DateTime::parse_from_rfc3339(raw).map_err(|source| ReportError::InvalidStartDate {
        raw: raw.to_string(),
        source,
    })?;
    if raw.as_bytes().get(10) != Some(&b'T') {
        return Err(ReportError::StartDateSeparator(raw.to_string()));
    }
    Ok(date)
}

/// Splits a card key of the form `#<letters>-<digits>` out of a description.
///
/// Only the first match is removed and the remainder is trimmed. Without a
/// match the description is returned unchanged along with an empty key.
pub fn extract_card_key(description: &str) -> (String, String) {
    match card_key_re().find(description) {
        Some(found) => {
            let activity = description.replacen(found.as_str(), "", 1).trim().to_string();
            let card_key = found.as_str()[1..].to_string();
            (activity, card_key)
        }
        None => (description.to_string(), String::new()),
    }
}
