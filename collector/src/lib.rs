pub mod config;
pub mod ids;
pub mod logs_api;
pub mod storage;

/// Failure to turn a log id into a document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(reqwest::StatusCode),
    #[error("reading log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("log is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SourceError> for analysis::batch::FetchError {
    fn from(value: SourceError) -> Self {
        Self::new(value)
    }
}
