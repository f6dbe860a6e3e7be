use std::time::Duration;

use lumi_core::{LaunchRequest, StatusResponse};
use url::Url;

use crate::{ClientError, FailureKind};

/// Fixed cadence of `/status` requests.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub poll_interval: Duration,
    /// `None` leaves timeouts to the transport defaults.
    pub request_timeout: Option<Duration>,
}

impl ClientSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: None,
        }
    }

    pub fn parse(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self::new(base_url))
    }

    fn endpoint(&self, name: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(name)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

/// The two backend calls the panel makes.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// `POST /launch`; returns the plain-text response body.
    async fn launch(&self, request: &LaunchRequest) -> Result<String, ClientError>;

    /// `GET /status`.
    async fn status(&self) -> Result<StatusResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    launch_url: Url,
    status_url: Url,
}

impl ReqwestTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            launch_url: settings.endpoint("launch")?,
            status_url: settings.endpoint("status")?,
        })
    }

    pub fn launch_url(&self) -> &Url {
        &self.launch_url
    }

    pub fn status_url(&self) -> &Url {
        &self.status_url
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn launch(&self, request: &LaunchRequest) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.launch_url.clone())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let response = ensure_success(response).await?;
        response.text().await.map_err(map_reqwest_error)
    }

    async fn status(&self) -> Result<StatusResponse, ClientError> {
        let response = self
            .client
            .get(self.status_url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let response = ensure_success(response).await?;
        let body = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&body)
            .map_err(|err| ClientError::new(FailureKind::Decode, err.to_string()))
    }
}

/// Turns a non-2xx response into an error carrying the status line and any body text.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();
    let message = if body.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {body}")
    };
    Err(ClientError::new(
        FailureKind::HttpStatus(status.as_u16()),
        message,
    ))
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ClientError::new(FailureKind::Decode, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
