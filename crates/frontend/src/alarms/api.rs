//! HTTP client for the alerting backend.
//!
//! One `ApiUtil` is created by the host and shared with every view through
//! `AlarmContext`. All endpoints live under `{base}/api/alarms`, optionally
//! scoped to one network (`/networks/{id}`).

use contracts::alarms::{AlertReceiver, AlertRoutes, AlertSuppression, FiringAlarm};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api_utils::{api_base, join_url};

const ALARMS_API_ROOT: &str = "/api/alarms";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to send request: {0}")]
    Request(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUtil {
    base_url: String,
    network_id: Option<String>,
}

impl ApiUtil {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            network_id: None,
        }
    }

    /// Client for the backend serving the current page (see `api_base`).
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    /// Scopes every endpoint to one network.
    pub fn with_network(mut self, network_id: impl Into<String>) -> Self {
        self.network_id = Some(network_id.into());
        self
    }

    /// Absolute URL of an alarms endpoint, e.g. `url("/alerts")`.
    pub fn url(&self, path: &str) -> String {
        let root = join_url(&self.base_url, ALARMS_API_ROOT);
        let root = match &self.network_id {
            Some(id) => format!("{}/networks/{}", root, urlencoding::encode(id)),
            None => root,
        };
        join_url(&root, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !response.ok() {
            log::warn!("GET {} -> {}", url, response.status());
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn view_firing_alerts(&self) -> Result<Vec<FiringAlarm>, ApiError> {
        self.get_json(&self.url("/alerts")).await
    }

    pub async fn get_suppressions(&self) -> Result<Vec<AlertSuppression>, ApiError> {
        self.get_json(&self.url("/silences")).await
    }

    pub async fn get_route_tree(&self) -> Result<AlertRoutes, ApiError> {
        self.get_json(&self.url("/route")).await
    }

    pub async fn get_receivers(&self) -> Result<Vec<AlertReceiver>, ApiError> {
        self.get_json(&self.url("/receivers")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let api = ApiUtil::new("http://localhost:3000/");
        assert_eq!(api.url("/alerts"), "http://localhost:3000/api/alarms/alerts");
        assert_eq!(api.url(""), "http://localhost:3000/api/alarms");
    }

    #[test]
    fn network_scope_is_encoded() {
        let api = ApiUtil::new("https://nms.example.com").with_network("lab net/1");
        assert_eq!(
            api.url("alert_config"),
            "https://nms.example.com/api/alarms/networks/lab%20net%2F1/alert_config"
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApiError::Status(503).to_string(),
            "request failed with status 503"
        );
        assert_eq!(
            ApiError::Decode("eof".into()).to_string(),
            "failed to parse response: eof"
        );
    }
}
