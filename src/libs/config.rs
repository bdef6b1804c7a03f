//! Runtime configuration for toggl2sgu.
//!
//! The whole configuration surface is two environment variables:
//!
//! - **`TOGGL_KEY`** (required): Toggl Track API token
//! - **`SGU_USER`** (optional): user name written into every report row
//!
//! `Config` is resolved once at startup and passed down by reference, so no
//! other module reads the environment.
//!
//! ```rust
//! use toggl2sgu::libs::config::Config;
//!
//! let config = Config::from_lookup(|name| match name {
//!     "TOGGL_KEY" => Some("secret".to_string()),
//!     _ => None,
//! })?;
//! assert_eq!(config.sgu_user, "");
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::error::ReportError;
use anyhow::Result;
use std::env;
use std::fmt;

/// Environment variable holding the Toggl Track API token.
pub const TOGGL_KEY_VAR: &str = "TOGGL_KEY";

/// Environment variable holding the SGU user name.
pub const SGU_USER_VAR: &str = "SGU_USER";

#[derive(Clone, PartialEq)]
pub struct Config {
    /// Toggl Track API token, sent as the Basic auth user name
    pub toggl_key: String,
    /// SGU user name, empty when unset
    pub sgu_user: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingEnv`] when `TOGGL_KEY` is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// An empty `TOGGL_KEY` is treated the same as a missing one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let toggl_key = lookup(TOGGL_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(ReportError::MissingEnv(TOGGL_KEY_VAR))?;
        let sgu_user = lookup(SGU_USER_VAR).unwrap_or_default();

        Ok(Self { toggl_key, sgu_user })
    }
}

// The API token stays out of logs and error reports.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("toggl_key", &"<redacted>")
            .field("sgu_user", &self.sgu_user)
            .finish()
    }
}
