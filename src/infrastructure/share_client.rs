//! HTTP client for the share server.
//!
//! One `POST {base}/create/` per call. No retries and no request timeout.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;

use crate::domain::{AppError, PublishOutcome, Result, ShareBackend, ShareRequest, ShareResponse};

/// User-Agent string for all HTTP requests
pub const USER_AGENT: &str = concat!("share-note/", env!("CARGO_PKG_VERSION"));

/// Share server client.
#[derive(Debug, Clone)]
pub struct ShareClient {
    client: Client,
}

impl ShareClient {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    /// Returns error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }

    /// Send `request` and decode the share URL.
    ///
    /// # Errors
    /// - [`AppError::Network`] when no response arrives.
    /// - [`AppError::Rejected`] on a non-success status.
    /// - [`AppError::MalformedResponse`] when a success body has no `url`.
    pub async fn create(
        &self,
        base_url: &str,
        secret: &str,
        request: &ShareRequest,
    ) -> Result<ShareResponse> {
        let url = create_endpoint(base_url);
        tracing::debug!(
            %url,
            content_len = request.content.len(),
            expire_after_read = request.expire_after_read,
            "Sending share request"
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {secret}"))
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Share server rejected request");
            return Err(AppError::rejected(
                status.as_u16(),
                server_detail(&body).as_deref(),
            ));
        }

        let body = response.text().await.map_err(|e| AppError::Network {
            message: e.to_string(),
        })?;

        let share: ShareResponse =
            serde_json::from_str(&body).map_err(|e| AppError::MalformedResponse {
                message: e.to_string(),
            })?;

        tracing::info!(url = %share.url, "Note shared");
        Ok(share)
    }
}

#[async_trait(?Send)]
impl ShareBackend for ShareClient {
    async fn share(&self, base_url: &str, secret: &str, request: &ShareRequest) -> PublishOutcome {
        self.create(base_url, secret, request).await.into()
    }
}

/// `{base}/create/` without doubling a trailing slash.
fn create_endpoint(base_url: &str) -> String {
    format!("{}/create/", base_url.trim_end_matches('/'))
}

/// String `detail` field of an error body, if any.
fn server_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}
