//! HTTP access to the alert backend
//!
//! [`ApiClient`] is the single place that talks HTTP: one call, one request.
//! [`HttpBackend`] maps each backend operation onto its endpoint.

use std::time::Duration;

use pricewatch_core::prelude::*;
use pricewatch_core::{
    ChannelUpdate, LogFeed, NotificationSettings, RuleActivation, RuleDraft, RuleKey, RuleSet,
    TestMessage,
};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::backend::AlertBackend;
use crate::config::{parse_base_url, ServerSettings};

/// Backend endpoint paths, joined onto the configured base URL
pub mod endpoints {
    pub const RULES: &str = "/api/actions";
    pub const ADD_RULE: &str = "/api/add";
    pub const UPDATE_RULE: &str = "/api/update";
    pub const DELETE_RULE: &str = "/api/delete";
    pub const SETTINGS: &str = "/api/settings";
    pub const LOGS: &str = "/api/logs";
}

/// Longest raw body echoed into an error when the backend sent no `error` field
const MAX_ERROR_BODY: usize = 200;

/// JSON-over-HTTP client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, http })
    }

    pub fn from_settings(settings: &ServerSettings) -> Result<Self> {
        let base_url = parse_base_url(&settings.base_url)?;
        Self::new(base_url, settings.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `endpoint` against the base URL, keeping any base path prefix
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(endpoint.trim_start_matches('/'))
            .map_err(|e| Error::invalid_url(endpoint, e.to_string()))
    }

    /// Issue exactly one request and decode the JSON answer.
    ///
    /// `Content-Type: application/json` is always sent; a body only when
    /// `payload` is `Some`. Non-2xx answers become [`Error::Backend`].
    pub async fn call<T, P>(&self, endpoint: &str, method: Method, payload: Option<&P>) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        debug!("{} {}", method.as_str(), url);

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(body) = payload {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(endpoint, e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::transport(endpoint, e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&bytes)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            warn!("{} answered {}: {}", endpoint, status.as_u16(), message);
            return Err(Error::backend(endpoint, status.as_u16(), message));
        }

        serde_json::from_slice(&bytes).map_err(|e| Error::decode(endpoint, e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.call::<T, ()>(endpoint, Method::GET, None).await
    }

    pub async fn post<T, P>(&self, endpoint: &str, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.call(endpoint, Method::POST, Some(payload)).await
    }
}

/// Pull the backend's `{"error": ...}` text, falling back to the raw body
fn error_message(body: &[u8]) -> Option<String> {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return Some(parsed.error);
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(MAX_ERROR_BODY).collect())
}

/// [`AlertBackend`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: ApiClient,
    test_endpoint: String,
}

impl HttpBackend {
    pub fn new(client: ApiClient, test_endpoint: impl Into<String>) -> Self {
        Self {
            client,
            test_endpoint: test_endpoint.into(),
        }
    }

    pub fn from_settings(settings: &ServerSettings) -> Result<Self> {
        Ok(Self::new(
            ApiClient::from_settings(settings)?,
            settings.test_endpoint.clone(),
        ))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl AlertBackend for HttpBackend {
    async fn fetch_rules(&self) -> Result<RuleSet> {
        // `null` means nothing stored yet
        let rules: Option<RuleSet> = self.client.get(endpoints::RULES).await?;
        Ok(rules.unwrap_or_default())
    }

    async fn upsert_rule(&self, draft: &RuleDraft) -> Result<()> {
        let _: IgnoredAny = self.client.post(endpoints::ADD_RULE, draft).await?;
        Ok(())
    }

    async fn set_active(&self, symbol: &str, active: bool) -> Result<()> {
        let body = RuleActivation {
            symbol: symbol.to_string(),
            active,
        };
        let _: IgnoredAny = self.client.post(endpoints::UPDATE_RULE, &body).await?;
        Ok(())
    }

    async fn delete_rule(&self, symbol: &str) -> Result<()> {
        let body = RuleKey {
            symbol: symbol.to_string(),
        };
        let _: IgnoredAny = self.client.post(endpoints::DELETE_RULE, &body).await?;
        Ok(())
    }

    async fn fetch_settings(&self) -> Result<NotificationSettings> {
        let settings: Option<NotificationSettings> = self.client.get(endpoints::SETTINGS).await?;
        Ok(settings.unwrap_or_default())
    }

    async fn save_settings(&self, update: &ChannelUpdate) -> Result<()> {
        let _: IgnoredAny = self.client.post(endpoints::SETTINGS, update).await?;
        Ok(())
    }

    async fn fetch_logs(&self) -> Result<LogFeed> {
        let feed: Option<LogFeed> = self.client.get(endpoints::LOGS).await?;
        Ok(feed.unwrap_or_default())
    }

    async fn send_test_message(&self, message: &TestMessage) -> Result<()> {
        let _: IgnoredAny = self.client.post(&self.test_endpoint, message).await?;
        Ok(())
    }
}
