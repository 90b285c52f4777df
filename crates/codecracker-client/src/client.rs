//! HTTP client for the statistics API

use std::time::Duration;

use codecracker_core::prelude::*;
use codecracker_core::{ProfileStats, Query};
use serde::Deserialize;
use url::Url;

use crate::response::{classify_response, is_success};

/// Base endpoint used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Resource path for profile lookups, relative to the base endpoint
pub const PROFILE_PATH: &str = "api/profile";

/// Resource path for the liveness check, relative to the base endpoint
pub const HEALTH_PATH: &str = "health";

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Client for the statistics API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for `base_url`.
    ///
    /// `timeout` of `None` means requests may wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("codecracker/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of a resource under the base endpoint
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::invalid_endpoint(self.base_url.as_str(), e.to_string()))
    }

    /// `POST <base>/api/profile` with the query as a JSON body.
    ///
    /// Network failures become [`Error::Transport`]; API-reported failures
    /// become [`Error::Api`].
    pub async fn request_profile(&self, query: &Query) -> Result<ProfileStats> {
        let url = self.endpoint(PROFILE_PATH)?;
        info!(
            "Fetching profile: platform={} username={}",
            query.platform(),
            query.username()
        );

        let response = self
            .http
            .post(url)
            .json(query)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        trace!("Response body: {}", body);

        let result = classify_response(status.as_u16(), &body);
        if let Err(ref e) = result {
            warn!("Profile fetch failed: {}", e.user_message());
        }
        result
    }

    /// `GET <base>/health`
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(HEALTH_PATH)?;
        debug!("Checking API health at {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !is_success(status.as_u16()) {
            return Err(Error::api(
                Some(status.as_u16()),
                format!("Health check returned {}", status),
            ));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| Error::transport(e.to_string()))
    }
}

/// Parse and normalize a base endpoint.
///
/// The path always ends in `/` so relative resource paths append to it
/// instead of replacing its last segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let mut url = Url::parse(raw).map_err(|e| Error::invalid_endpoint(raw, e.to_string()))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_endpoint(raw, "expected an http(s) URL"));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
