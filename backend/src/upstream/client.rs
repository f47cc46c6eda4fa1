use reqwest::Client as HttpClient;
use serde_json::Value;
use shared::api::API_KEY_HEADER;
use thiserror::Error;
use url::Url;

use crate::config::GatewayConfig;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("URL parsing failed: {0}")]
    UrlError(#[from] url::ParseError),
}

/// What the inference service answered, when it answered at all.
#[derive(Debug)]
pub enum UpstreamReply {
    Success(Value),
    Rejected { status: u16, body: String },
}

/// Client for the external inference service. Cloning shares the
/// underlying connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    http_client: HttpClient,
    base_url: Url,
    api_key: String,
    read_retry: bool,
}

impl UpstreamClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, UpstreamError> {
        let http_client = HttpClient::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http_client,
            base_url: config.upstream_base_url.clone(),
            api_key: config.api_key.clone(),
            read_retry: config.read_retry,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn predict(&self, features: &Value) -> Result<UpstreamReply, UpstreamError> {
        let url = self.base_url.join("predict")?;
        log::debug!("POST {}", url);

        let response = self
            .http_client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(features)
            .send()
            .await?;

        Self::into_reply(response).await
    }

    /// The lookup is a plain read, so when enabled it gets one more attempt
    /// after a connect or timeout failure. Upstream rejections are never
    /// retried.
    pub async fn analyze_star(&self, star_id: &str) -> Result<UpstreamReply, UpstreamError> {
        let url = self.star_url(star_id)?;
        let attempts = if self.read_retry { 2 } else { 1 };
        let mut attempt = 1;

        loop {
            log::debug!("GET {} (attempt {}/{})", url, attempt, attempts);
            let sent = self
                .http_client
                .get(url.clone())
                .header(API_KEY_HEADER, &self.api_key)
                .send()
                .await;

            match sent {
                Ok(response) => return Self::into_reply(response).await,
                Err(e) if attempt < attempts && (e.is_connect() || e.is_timeout()) => {
                    log::warn!("Retrying star lookup for {} after: {}", star_id, e);
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn star_url(&self, star_id: &str) -> Result<Url, UpstreamError> {
        let segment = urlencoding::encode(star_id);
        Ok(self.base_url.join(&format!("analyze-star/{}", segment))?)
    }

    async fn into_reply(response: reqwest::Response) -> Result<UpstreamReply, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Ok(UpstreamReply::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(UpstreamReply::Success(serde_json::from_slice(&bytes)?))
    }
}
