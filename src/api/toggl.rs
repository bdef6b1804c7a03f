//! Toggl Track API client for fetching the user, projects and time entries.
//!
//! ## Features
//!
//! - **User Lookup**: Resolves the default workspace of the token owner
//! - **Projects**: Lists the workspace projects to build an id to name map
//! - **Time Entries**: Retrieves the entries of a date range
//! - **Fail Fast**: Transport errors, non-200 responses and malformed bodies
//!   are all returned as errors; nothing is retried
//!
//! ## Authentication
//!
//! Toggl uses HTTP Basic auth with the API token as the user name and the
//! literal string `api_token` as the password.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toggl2sgu::api::toggl::{Toggl, TogglConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let toggl = Toggl::new(&TogglConfig::new("my-api-token"));
//! let projects = toggl.get_project_map().await?;
//! let entries = toggl.get_time_entries("2024-03-01", "2024-03-31").await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::ReportError;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_info};
use anyhow::{Context, Result};
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

/// Base URL of the Toggl Track v9 API.
pub const API_URL: &str = "https://api.track.toggl.com/api/v9";

/// Password paired with the API token in Basic auth.
const API_TOKEN_PASSWORD: &str = "api_token";
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const ME_URL: &str = "me";
const TIME_ENTRIES_URL: &str = "me/time_entries";

/// Subset of the `/me` response used by the report.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Me {
    pub default_workspace_id: i64,
}

/// A Toggl project. Inactive projects are kept.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}

/// A Toggl time entry as returned by `/me/time_entries`.
///
/// `duration` is in seconds and is negative while the timer is running.
/// Toggl sends `null` for a missing project, stop time, description or tag
/// list.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: i64,
    #[serde(default)]
    pub project_id: Option<i64>,
    pub start: String,
    #[serde(default)]
    pub stop: Option<String>,
    pub duration: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Connection settings for the Toggl API.
#[derive(Clone)]
pub struct TogglConfig {
    pub api_token: String,
    pub api_url: String,
}

impl TogglConfig {
    /// Settings for the public Toggl Track API.
    pub fn new(api_token: &str) -> Self {
        Self {
            api_token: api_token.to_string(),
            api_url: API_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for TogglConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TogglConfig")
            .field("api_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Toggl Track API client.
#[derive(Debug)]
pub struct Toggl {
    /// HTTP client with default (unlimited) timeouts
    client: Client,
    config: TogglConfig,
}

impl Toggl {
    pub fn new(config: &TogglConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Fetches the token owner's profile.
    ///
    /// # API Endpoint
    ///
    /// `GET /me`
    pub async fn get_me(&self) -> Result<Me> {
        msg_info!(Message::FetchingUser);
        self.get("user data", ME_URL, &[]).await
    }

    /// Fetches every project in the user's default workspace.
    ///
    /// Calls [`Toggl::get_me`] first to learn the workspace id.
    ///
    /// # API Endpoint
    ///
    /// `GET /workspaces/{workspace_id}/projects`
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let me = self.get_me().await?;
        msg_info!(Message::FetchingProjects);

        let path = format!("workspaces/{}/projects", me.default_workspace_id);
        let projects: Vec<Project> = self.get("projects", &path, &[]).await?;
        msg_debug!(Message::ProjectsFetched(projects.len()));
        Ok(projects)
    }

    /// Builds the project id to project name lookup used by the mapper.
    pub async fn get_project_map(&self) -> Result<HashMap<i64, String>> {
        let projects = self.get_projects().await?;
        Ok(projects.into_iter().map(|project| (project.id, project.name)).collect())
    }

    /// Fetches the time entries between two dates.
    ///
    /// Both dates are forwarded verbatim (URL-encoded) as `start_date` and
    /// `end_date`. Toggl expects `YYYY-MM-DD`; malformed values are rejected
    /// by the service and surface as an HTTP status error.
    ///
    /// # API Endpoint
    ///
    /// `GET /me/time_entries?start_date=...&end_date=...`
    pub async fn get_time_entries(&self, start_date: &str, end_date: &str) -> Result<Vec<TimeEntry>> {
        msg_info!(Message::FetchingTimeEntries {
            start: start_date.to_string(),
            end: end_date.to_string(),
        });

        let query = [("start_date", start_date), ("end_date", end_date)];
        let entries: Vec<TimeEntry> = self.get("time entries", TIME_ENTRIES_URL, &query).await?;
        msg_debug!(Message::TimeEntriesFetched(entries.len()));
        Ok(entries)
    }

    /// Issues an authenticated GET and decodes the JSON body.
    ///
    /// `endpoint` is a human-readable name used in error messages.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.config.api_url, path);
        msg_debug!("GET {}", url);

        let res = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .basic_auth(&self.config.api_token, Some(API_TOKEN_PASSWORD))
            .query(query)
            .send()
            .await
            .with_context(|| Message::TogglRequestFailed(endpoint.to_string()))?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(ReportError::HttpStatus {
                endpoint: endpoint.to_string(),
                status,
            }
            .into());
        }

        res.json::<T>().await.with_context(|| Message::TogglDecodeFailed(endpoint.to_string()))
    }
}
