use analysis::batch::{FetchError, LogSource};
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::SourceError;

pub const DEFAULT_BASE_URL: &str = "https://logs.tf/";

/// Client for the log site's JSON endpoint, `<base>/json/<id>`.
///
/// Failed requests are not retried.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new<IS>(base_url: IS, insecure: bool) -> Result<Self, SourceError>
    where
        IS: Into<String>,
    {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(insecure)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn log_url(&self, log_id: &str) -> String {
        format!("{}/json/{}", self.base_url.trim_end_matches('/'), log_id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_log(&self, log_id: &str) -> Result<serde_json::Value, SourceError> {
        let response = self.http.get(self.log_url(log_id)).send().await?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Unsuccessful response");
            return Err(SourceError::Status(response.status()));
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}

impl LogSource for Client {
    fn fetch<'f, 'own>(
        &'own self,
        log_id: String,
    ) -> BoxFuture<'f, Result<serde_json::Value, FetchError>>
    where
        'own: 'f,
    {
        async move { self.get_log(&log_id).await.map_err(FetchError::from) }.boxed()
    }
}
