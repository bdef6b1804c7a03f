//! API client modules for external service integrations.
//!
//! toggl2sgu talks to a single service, Toggl Track, through its v9 REST API.
//! Every call is a plain authenticated GET; there is no session caching,
//! pagination or retry.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toggl2sgu::api::{Toggl, TogglConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let toggl = Toggl::new(&TogglConfig::new("my-api-token"));
//! let entries = toggl.get_time_entries("2024-03-01", "2024-03-31").await?;
//! # Ok(())
//! # }
//! ```

pub mod toggl;

pub use toggl::{Toggl, TogglConfig};
