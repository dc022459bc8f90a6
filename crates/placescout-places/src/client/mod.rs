//! HTTP client for the places provider.
//!
//! Wraps `reqwest` with the provider's credential, base URL, and typed
//! response deserialization. The credential is fixed at construction and
//! never mutated.

mod autocomplete;
mod details;
mod search;

use std::time::Duration;

use placescout_core::config::DEFAULT_PLACES_BASE_URL;
use placescout_core::AppConfig;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::photo::photo_url_from_base;
use crate::readiness::ReadinessPolicy;

pub(crate) const TEXT_SEARCH_ENDPOINT: &str = "textsearch/json";
pub(crate) const DETAILS_ENDPOINT: &str = "details/json";
pub(crate) const AUTOCOMPLETE_ENDPOINT: &str = "autocomplete/json";

const DEFAULT_USER_AGENT: &str = "placescout/0.1 (merchant-explore)";

/// Client for the places provider's text-search, details, and autocomplete
/// endpoints.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    readiness: ReadinessPolicy,
}

impl PlacesClient {
    /// Creates a client pointed at the production provider.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(
            api_key,
            timeout_secs,
            DEFAULT_PLACES_BASE_URL,
            DEFAULT_USER_AGENT,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so endpoint paths join below the base
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            readiness: ReadinessPolicy::default(),
        })
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, PlacesError> {
        let readiness = ReadinessPolicy::new(
            config.readiness_max_attempts,
            Duration::from_millis(config.readiness_interval_ms),
        );
        Ok(Self::with_base_url(
            &config.places_api_key,
            config.request_timeout_secs,
            &config.places_base_url,
            &config.user_agent,
        )?
        .with_readiness(readiness))
    }

    /// Replaces the continuation-token readiness policy.
    #[must_use]
    pub fn with_readiness(mut self, readiness: ReadinessPolicy) -> Self {
        self.readiness = readiness;
        self
    }

    #[must_use]
    pub fn readiness(&self) -> ReadinessPolicy {
        self.readiness
    }

    /// Photo URL for `photo_ref` using this client's base URL and credential.
    #[must_use]
    pub fn photo_url(&self, photo_ref: Option<&str>, max_width: u32) -> Option<String> {
        photo_url_from_base(&self.base_url, photo_ref, max_width, Some(&self.api_key))
    }

    /// Builds the request URL for `endpoint` with percent-encoded query
    /// parameters, appending the credential last.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidUrl {
                url: format!("{}{endpoint}", self.base_url),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body.
    ///
    /// `context` names the call in errors. URLs are stripped from transport
    /// errors because they carry the credential.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
