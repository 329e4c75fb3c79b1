//! Alert dispatch.
//!
//! Renders the configured body template against the current readings and
//! issues a single HTTP request. Fire and forget: at most one attempt per
//! cycle, no retry, no queuing. Failures are returned to the caller to log
//! and must never escalate past the dispatch call.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};

use crate::core::config::HttpRequest;
use crate::core::probe::Reading;
use crate::error::{Result, WatchdogError};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("valid placeholder regex"));

const DISPATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Render the configured body template against the current readings.
///
/// Every `{name}` placeholder is replaced with the stringified reading for
/// that resource; placeholders with no matching reading stay verbatim. A
/// substitution that leaves the body unparseable is a dispatch error.
pub fn render_payload(
    template: &serde_json::Value,
    readings: &[(String, Reading)],
) -> Result<serde_json::Value> {
    let json = template.to_string();
    let replaced = PLACEHOLDER_RE.replace_all(&json, |caps: &Captures| {
        match readings.iter().find(|(name, _)| *name == caps[1]) {
            Some((_, reading)) => reading.to_string(),
            None => caps[0].to_string(),
        }
    });

    serde_json::from_str(&replaced).map_err(|e| {
        WatchdogError::dispatch(format!("Substituted payload is not valid JSON: {}", e))
    })
}

/// Issues the configured alert request.
pub struct AlertDispatcher {
    client: Client,
    request: HttpRequest,
}

impl AlertDispatcher {
    pub fn new(request: HttpRequest) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("hostwatch/", env!("CARGO_PKG_VERSION")))
            .timeout(DISPATCH_TIMEOUT)
            .build()?;

        Ok(Self { client, request })
    }

    /// Send one alert request with placeholders substituted from `readings`.
    ///
    /// Returns the response status on success. Transport failures, timeouts
    /// and non-success statuses are errors for the caller to log; none are
    /// retried.
    pub async fn dispatch(&self, readings: &[(String, Reading)]) -> Result<StatusCode> {
        let payload = render_payload(&self.request.body, readings)?;

        let method = Method::from_bytes(self.request.method.as_bytes()).map_err(|_| {
            WatchdogError::dispatch(format!("Invalid HTTP method: {}", self.request.method))
        })?;

        let mut headers = HeaderMap::new();
        for (key, value) in &self.request.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| WatchdogError::dispatch(format!("Invalid header name: {}", key)))?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                WatchdogError::dispatch(format!("Invalid value for header {}", key))
            })?;
            headers.insert(name, value);
        }

        let response = self
            .client
            .request(method, &self.request.url)
            .headers(headers)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WatchdogError::dispatch(format!(
                "Alert endpoint returned status {}",
                status
            )));
        }

        Ok(status)
    }
}
