//! TakeLine HTTP client.
//!
//! One GET per station pair, no retry. Failures are reported as
//! [`MetroError`] by [`MetroClient::try_travel_time`] and collapsed to
//! `None` by [`MetroClient::get_travel_time`].

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::batch::TravelTimeProvider;
use crate::domain::StationName;

use super::encode::encode_station;
use super::error::MetroError;
use super::types::TakeLineResponse;

/// Default TakeLine endpoint on the Chongqing metro website.
const DEFAULT_BASE_URL: &str = "https://www.cqmetro.cn/Front/html/TakeLine!queryYsTakeLine.action";

/// The endpoint rejects requests that don't look like they come from a browser.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

const START_PARAM: &str = "entity.startStaName";
const END_PARAM: &str = "entity.endStaName";

/// Environment variable overriding the endpoint URL.
pub const BASE_URL_VAR: &str = "METRO_BASE_URL";

/// Environment variable overriding the request timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "METRO_TIMEOUT_SECS";

/// Configuration for the metro client.
#[derive(Debug, Clone)]
pub struct MetroConfig {
    /// Full URL of the TakeLine endpoint
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MetroConfig {
    /// Create a config pointing at the production endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Build a config from defaults plus overrides found via `lookup`.
    ///
    /// `lookup` is normally `std::env::var(..).ok()`. A timeout that is not
    /// a positive whole number of seconds is ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(url);
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(secs),
                _ => warn!(
                    value = %raw,
                    default_secs = config.timeout_secs,
                    "{TIMEOUT_VAR} must be a positive number of seconds, using default"
                ),
            }
        }

        config
    }
}

impl Default for MetroConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the metro TakeLine endpoint.
#[derive(Debug, Clone)]
pub struct MetroClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetroClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MetroConfig) -> Result<Self, MetroError> {
        let mut headers = HeaderMap::new();

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| MetroError::InvalidHeader(config.user_agent.clone()))?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Query the travel time between two stations, in seconds.
    ///
    /// Names are percent-encoded before being handed to the query
    /// serializer, which escapes them a second time. The endpoint decodes
    /// twice, so it must receive this doubly-encoded form.
    pub async fn try_travel_time(
        &self,
        start: &StationName,
        end: &StationName,
    ) -> Result<u64, MetroError> {
        let encoded_start = encode_station(start.as_str());
        let encoded_end = encode_station(end.as_str());

        debug!(%start, %end, "querying travel time");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                (START_PARAM, encoded_start.as_str()),
                (END_PARAM, encoded_end.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetroError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: TakeLineResponse =
            serde_json::from_str(&body).map_err(|e| MetroError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        parsed.travel_time()
    }

    /// Query the travel time between two stations, in seconds.
    ///
    /// Returns `None` on any failure; the reason is logged.
    pub async fn get_travel_time(&self, start: &StationName, end: &StationName) -> Option<u64> {
        match self.try_travel_time(start, end).await {
            Ok(secs) => Some(secs),
            Err(e) => {
                warn!(%start, %end, error = %e, "travel time query failed");
                None
            }
        }
    }
}

impl TravelTimeProvider for MetroClient {
    async fn travel_time(&self, start: &StationName, end: &StationName) -> Option<u64> {
        self.get_travel_time(start, end).await
    }
}
