use std::path::PathBuf;

/// Failures while loading the conference document.
#[derive(Debug, thiserror::Error)]
pub enum ConferenceError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("conference document is not valid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}
