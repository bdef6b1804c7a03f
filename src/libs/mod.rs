//! Core library modules for the toggl2sgu application.
//!
//! ## Features
//!
//! - **Configuration**: Environment-sourced run settings
//! - **Mapping**: Toggl entry to SGU row conversion with card key extraction
//! - **Aggregation**: Grouping rows by project, date and activity
//! - **Export**: SGU CSV writer and hour formatting
//! - **Messaging**: Centralized user-facing text and output macros
//!
//! ## Usage
//!
//! ```rust
//! use toggl2sgu::libs::{formatter::format_hours, report::group_entries, sgu::SguEntry};
//!
//! let row = SguEntry {
//!     date: "05/03/2024".to_string(),
//!     project: "Alpha".to_string(),
//!     category: "dev".to_string(),
//!     activity: "Coding".to_string(),
//!     card_key: String::new(),
//!     hours: 1.5,
//!     user_name: String::new(),
//! };
//! let grouped = group_entries(vec![row.clone(), row]);
//! assert_eq!(format_hours(grouped[0].hours), "3,00000");
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod report;
pub mod sgu;
