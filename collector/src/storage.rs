use analysis::batch::{FetchError, LogSource};
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::SourceError;

/// Logs saved as `<folder>/<id>.json`.
pub struct DirectorySource {
    folder: std::sync::Arc<std::path::PathBuf>,
}

impl DirectorySource {
    pub fn new<P>(folder: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self {
            folder: std::sync::Arc::new(folder.into()),
        }
    }

    pub fn log_path(&self, log_id: &str) -> std::path::PathBuf {
        self.folder.join(format!("{}.json", log_id))
    }

    pub async fn load(&self, log_id: &str) -> Result<serde_json::Value, SourceError> {
        let content = tokio::fs::read(self.log_path(log_id)).await?;

        Ok(serde_json::from_slice(&content)?)
    }
}

impl LogSource for DirectorySource {
    fn fetch<'f, 'own>(
        &'own self,
        log_id: String,
    ) -> BoxFuture<'f, Result<serde_json::Value, FetchError>>
    where
        'own: 'f,
    {
        async move { self.load(&log_id).await.map_err(FetchError::from) }.boxed()
    }
}
