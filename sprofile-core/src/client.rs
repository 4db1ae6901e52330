use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{ProfileApi, AUTHORIZE_PATH, BEARER_TOKEN_PATH, PROFILE_PATH, TRACKS_PATH};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{TopArtists, UserProfile};
use crate::timeout::with_timeout;

/// HTTP client for the backend's OAuth proxy.
///
/// Plain GETs against already-authenticated endpoints. The session lives in
/// the browser's cookies, so no credentials are attached here.
pub struct ApiClient {
    base_url: String,
    request_timeout: Option<Duration>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone()).with_timeout(config.request_timeout)
    }

    pub fn with_timeout(mut self, request_timeout: Option<Duration>) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path and return the response if its status is 2xx.
    async fn get(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            debug!("GET {url} -> {status}");
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(resp)
    }

    /// GET a path and deserialize its JSON body.
    ///
    /// The body is read as text first so a malformed payload reports the
    /// serde error rather than a generic decode failure.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.get(path).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ProfileApi for ApiClient {
    async fn check_session(&self) -> Result<(), ApiError> {
        with_timeout(self.get(BEARER_TOKEN_PATH), self.request_timeout)
            .await?
            .map(|_| ())
    }

    async fn fetch_profile(&self) -> Result<Option<UserProfile>, ApiError> {
        with_timeout(self.get_json(PROFILE_PATH), self.request_timeout).await?
    }

    async fn fetch_top_artists(&self) -> Result<TopArtists, ApiError> {
        with_timeout(self.get_json(TRACKS_PATH), self.request_timeout).await?
    }

    fn authorize_url(&self) -> String {
        self.url(AUTHORIZE_PATH)
    }
}
