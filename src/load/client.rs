use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::{LoadError, Resource};

pub struct DataClient {
    client: Client,
    base_url: String,
}

impl DataClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(LoadError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single attempt, no retry: a failure here fails the whole load.
    pub async fn fetch<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, LoadError> {
        let url = format!("{}{}", self.base_url, resource.path());
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| LoadError::Request { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { resource, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LoadError::Request { resource, source })?;

        serde_json::from_slice(&body).map_err(|source| LoadError::Parse { resource, source })
    }
}
