use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::ConferenceError;

/// Where the conference document comes from.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the raw JSON document.
    async fn load(&self) -> Result<String, ConferenceError>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}

/// GET over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn load(&self) -> Result<String, ConferenceError> {
        let http_error = |source| ConferenceError::Http {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(http_error)?
            .error_for_status()
            .map_err(http_error)?;

        response.text().await.map_err(http_error)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// A document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn load(&self) -> Result<String, ConferenceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ConferenceError::Io {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks an HTTP source for `http://` and `https://` locations, a file source otherwise.
pub fn source_for(location: &str) -> Arc<dyn DataSource> {
    let location = location.trim();
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpSource::new(location))
    } else {
        Arc::new(FileSource::new(location))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Serves whatever document the test last put in it.
    #[derive(Debug, Default)]
    pub struct StaticSource {
        body: Mutex<Option<String>>,
    }

    impl StaticSource {
        pub fn new(body: &str) -> Self {
            Self {
                body: Mutex::new(Some(body.to_string())),
            }
        }

        pub fn unavailable() -> Self {
            Self::default()
        }

        pub fn set(&self, body: Option<&str>) {
            if let Ok(mut current) = self.body.lock() {
                *current = body.map(ToString::to_string);
            }
        }
    }

    #[async_trait]
    impl DataSource for StaticSource {
        async fn load(&self) -> Result<String, ConferenceError> {
            self.body
                .lock()
                .ok()
                .and_then(|body| body.clone())
                .ok_or_else(|| ConferenceError::Unavailable(self.describe()))
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }
}
