use std::time::Duration;

use url::Url;
use webmaster_logging::{wm_error, wm_info, wm_warn};

use crate::{ApiError, AskRequest, AskResponse, FailureKind, ScrapeRequest};

#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// Endpoint root; `/scrape` and `/ask` are resolved beneath it.
    pub base_url: String,
    pub connect_timeout: Option<Duration>,
    /// `None` waits for the transport to settle, however long that takes.
    pub request_timeout: Option<Duration>,
    /// Keep cookies across calls so the backend sees one client.
    pub send_credentials: bool,
}

impl BackendSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: None,
            request_timeout: None,
            send_credentials: true,
        }
    }
}

/// The scrape/ask service as seen by the session.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<(), ApiError>;

    async fn ask(&self, question: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    base: Url,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, ApiError> {
        let base = parse_base_url(&settings.base_url)?;

        let mut builder = reqwest::Client::builder().cookie_store(settings.send_credentials);
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| {
            wm_error!("Failed to build http client: {}", err);
            ApiError::new(FailureKind::Network, err.to_string())
        })?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, name: &str) -> Result<Url, ApiError> {
        self.base
            .join(name)
            .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))
    }

    async fn post<T>(&self, name: &str, body: &T) -> Result<reqwest::Response, ApiError>
    where
        T: serde::Serialize + ?Sized,
    {
        let endpoint = self.endpoint(name)?;
        wm_info!("POST {}", endpoint);
        let response = self
            .client
            .post(endpoint)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }

    async fn fetch_answer(&self, question: &str) -> Result<String, ApiError> {
        let response = self.post("ask", &AskRequest { question }).await?;
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: AskResponse = serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::MalformedBody, err.to_string()))?;
        Ok(parsed.answer)
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn scrape(&self, url: &str) -> Result<(), ApiError> {
        let result = self.post("scrape", &ScrapeRequest { url }).await.map(|_| ());
        if let Err(err) = &result {
            wm_warn!("Scrape of {} failed: {}", url, err);
        }
        result
    }

    async fn ask(&self, question: &str) -> Result<String, ApiError> {
        let result = self.fetch_answer(question).await;
        if let Err(err) = &result {
            wm_warn!("Ask failed (question_len={}): {}", question.len(), err);
        }
        result
    }
}

/// Parses the endpoint root, forcing a trailing slash so a path prefix such as
/// `https://host/api` keeps its last segment when endpoints are joined.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut normalized = raw.trim().to_owned();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let base = Url::parse(&normalized)
        .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, format!("{raw}: {err}")))?;
    if base.cannot_be_a_base() {
        return Err(ApiError::new(
            FailureKind::InvalidBaseUrl,
            format!("{raw}: not a base url"),
        ));
    }
    Ok(base)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::MalformedBody, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
