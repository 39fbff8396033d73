use crate::domain::model::Transfer;
use crate::domain::ports::{ConfigProvider, TransferSource};
use crate::utils::error::{FetchError, FetchResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

/// Reads both collections from the backend over HTTP.
pub struct LiveTransferSource {
    client: Client,
    transfers_endpoint: String,
    teams_endpoint: String,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl LiveTransferSource {
    pub fn new(transfers_endpoint: impl Into<String>, teams_endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            transfers_endpoint: transfers_endpoint.into(),
            teams_endpoint: teams_endpoint.into(),
            headers: HashMap::new(),
            timeout: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let mut source = Self::new(config.transfers_endpoint(), config.teams_endpoint());
        if let Some(headers) = config.headers() {
            source.headers = headers.clone();
        }
        source.timeout = config.request_timeout();
        source
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn get_json<T: DeserializeOwned + Send>(&self, endpoint: &str) -> FetchResult<T> {
        let mut request = self.client.get(endpoint);

        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Making API request to: {}", endpoint);
        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl TransferSource for LiveTransferSource {
    async fn fetch_transfers(&self) -> FetchResult<Vec<Transfer>> {
        self.get_json(&self.transfers_endpoint).await
    }

    async fn fetch_teams(&self) -> FetchResult<Vec<String>> {
        self.get_json(&self.teams_endpoint).await
    }
}
