use thiserror::Error;

/// Typed failures raised while turning Toggl data into a report.
///
/// These bubble up through `anyhow` to the single handler in `main`, which
/// prints them and exits with a non-zero status.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("Failed to parse date {raw:?}: {source}")]
    InvalidStartDate {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Failed to parse date {0:?}: date and time must be separated by 'T'")]
    StartDateSeparator(String),
    #[error("Failed to get {endpoint}: {status}")]
    HttpStatus { endpoint: String, status: reqwest::StatusCode },
}
