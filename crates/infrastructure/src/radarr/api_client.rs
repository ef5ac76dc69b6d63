//! HTTP adapter for the Radarr v3 REST API.
//!
//! Only the status query authenticates through the `apikey` query
//! parameter; every other call sends the `X-Api-Key` header.

use async_trait::async_trait;
use radarr_kodi_application::ports::RadarrApiPort;
use radarr_kodi_domain::{
    AppEndpoint, DomainError, NotificationEntry, NotificationSummary, SystemStatus,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "X-Api-Key";

pub struct HttpRadarrApi {
    client: reqwest::Client,
    endpoint: AppEndpoint,
}

impl HttpRadarrApi {
    pub fn new(endpoint: AppEndpoint, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(endpoint, client))
    }

    pub fn with_client(endpoint: AppEndpoint, client: reqwest::Client) -> Self {
        Self { client, endpoint }
    }

    async fn send(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, DomainError> {
        request.send().await.map_err(|e| send_error(url, e))
    }

    async fn read_json<T: DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, DomainError> {
        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::InvalidResponse(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl RadarrApiPort for HttpRadarrApi {
    async fn system_status(&self) -> Result<SystemStatus, DomainError> {
        let url = self.endpoint.status_url();
        let request = self
            .client
            .get(&url)
            .query(&[("apikey", self.endpoint.api_key.as_str())]);

        let response = self.send(&url, request).await?;
        Self::read_json(&url, response).await
    }

    async fn list_notifications(&self) -> Result<Vec<NotificationSummary>, DomainError> {
        let url = self.endpoint.notification_url();
        let request = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.endpoint.api_key.as_str());

        let response = self.send(&url, request).await?;
        Self::read_json(&url, response).await
    }

    async fn probe_path(&self, path: &str) -> Result<(), DomainError> {
        let url = self.endpoint.filesystem_url();
        let request = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.endpoint.api_key.as_str())
            .query(&[
                ("path", path),
                ("allowFoldersWithoutTrailingSlashes", "true"),
                ("includeFiles", "true"),
            ]);

        let response = self.send(&url, request).await?;
        debug!(status = response.status().as_u16(), path, "Filesystem probe answered");
        Ok(())
    }

    async fn create_notification(&self, entry: &NotificationEntry) -> Result<Value, DomainError> {
        let url = self.endpoint.notification_url();
        let request = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.endpoint.api_key.as_str())
            .json(entry);

        let response = self.send(&url, request).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| send_error(&url, e))?;

        debug!(status = status.as_u16(), body_len = body.len(), "Notification POST answered");

        serde_json::from_str(&body).map_err(|_| {
            DomainError::InvalidResponse(format!(
                "HTTP {} from {} with non-JSON body: {}",
                status.as_u16(),
                url,
                body.trim()
            ))
        })
    }
}

fn send_error(url: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::RequestTimeout {
            url: url.to_string(),
        }
    } else {
        DomainError::RequestFailed {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}
