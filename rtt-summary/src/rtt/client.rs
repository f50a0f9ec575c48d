//! RTT HTTP client.
//!
//! Provides async methods for querying the Realtime Trains JSON API.
//! RTT authenticates with HTTP Basic credentials issued at api.rtt.io.

use chrono::{Datelike, NaiveDate};

use crate::domain::{Crs, LocationBoard, Service, ServiceUid, StationRef};

use super::TimetableClient;
use super::convert::{convert_location, convert_search, convert_service};
use super::error::RttError;
use super::types::{SearchResponse, ServiceResponse};

/// Default base URL for the RTT JSON API.
const DEFAULT_BASE_URL: &str = "https://api.rtt.io/api/v1/json";

/// Configuration for the RTT client.
///
/// Credentials are passed in explicitly; reading them from the process
/// environment is the caller's business, not this module's.
#[derive(Debug, Clone)]
pub struct RttConfig {
    /// RTT API username
    pub username: String,
    /// RTT API password
    pub password: String,
    /// Base URL for the API (defaults to production RTT)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RttConfig {
    /// Create a new config with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// RTT JSON API client.
#[derive(Debug, Clone)]
pub struct RttClient {
    http: reqwest::Client,
    username: String,
    password: String,
    base_url: String,
}

impl RttClient {
    /// Create a new RTT client with the given configuration.
    pub fn new(config: RttConfig) -> Result<Self, RttError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            username: config.username,
            password: config.password,
            base_url: config.base_url,
        })
    }

    /// Perform an authenticated GET and return the raw body on success.
    ///
    /// `not_found` supplies the error to use for a 404, since its meaning
    /// depends on the endpoint (unknown station vs unknown service).
    async fn get_text(
        &self,
        url: &str,
        not_found: impl FnOnce() -> RttError,
    ) -> Result<String, RttError> {
        let response = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RttError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RttError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(not_found());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RttError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }

    fn parse_search(body: &str) -> Result<SearchResponse, RttError> {
        serde_json::from_str(body).map_err(|e| RttError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TimetableClient for RttClient {
    async fn search_between(
        &self,
        origin: Crs,
        destination: Crs,
    ) -> Result<LocationBoard, RttError> {
        let url = format!(
            "{}/search/{}/to/{}",
            self.base_url,
            origin.as_str(),
            destination.as_str()
        );

        let body = self
            .get_text(&url, || {
                RttError::StationNotFound(format!("{origin} or {destination}"))
            })
            .await?;

        let resp = Self::parse_search(&body)?;
        Ok(convert_search(&resp)?)
    }

    async fn location_info(&self, crs: Crs) -> Result<StationRef, RttError> {
        let url = format!("{}/search/{}", self.base_url, crs.as_str());

        let body = self
            .get_text(&url, || RttError::StationNotFound(crs.to_string()))
            .await?;

        let resp = Self::parse_search(&body)?;
        Ok(convert_location(&resp)?)
    }

    async fn service_details(
        &self,
        uid: &ServiceUid,
        run_date: NaiveDate,
    ) -> Result<Service, RttError> {
        let url = format!(
            "{}/service/{}/{:04}/{:02}/{:02}",
            self.base_url,
            uid.as_str(),
            run_date.year(),
            run_date.month(),
            run_date.day()
        );

        let body = self.get_text(&url, || RttError::ServiceNotFound).await?;

        // RTT answers 200 with an error body for some unknown services
        if body.is_empty() || body == "null" {
            return Err(RttError::ServiceNotFound);
        }

        let resp: ServiceResponse = serde_json::from_str(&body).map_err(|e| RttError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        Ok(convert_service(&resp)?)
    }
}
