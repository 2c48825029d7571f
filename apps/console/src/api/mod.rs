use std::sync::Arc;

use anyhow::Context;
use futures::future::{FutureExt, LocalBoxFuture};
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::DashboardSnapshot;

pub type ClientResult<T> = Result<T, ClientError>;

/// The two backend endpoints the dashboard talks to.
///
/// Controllers hold this as `Rc<dyn DashboardApi>` so tests can swap in a
/// scripted implementation.
pub trait DashboardApi {
    /// `GET /api/dashboard`. The envelope is returned whatever its `success` flag says.
    fn fetch_dashboard(&self) -> LocalBoxFuture<'_, ClientResult<ApiEnvelope<DashboardSnapshot>>>;

    /// `POST /api/run-analysis` with no body. Only transport success and a
    /// parseable JSON body are checked.
    fn trigger_analysis(&self) -> LocalBoxFuture<'_, ClientResult<Value>>;
}

#[derive(Clone)]
pub struct DashboardClient {
    inner: reqwest::Client,
    config: Arc<AppConfig>,
    base_url: String,
}

impl DashboardClient {
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let timeout = config.request_timeout;
        let base_url = normalize_base_url(&config.api_base_url);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            inner: client,
            config: Arc::new(config),
            base_url,
        })
    }

    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    pub async fn get_dashboard(&self) -> ClientResult<ApiEnvelope<DashboardSnapshot>> {
        let builder = self.request(Method::GET, "api/dashboard");
        self.send(builder).await
    }

    pub async fn post_run_analysis(&self) -> ClientResult<Value> {
        let builder = self.request(Method::POST, "api/run-analysis");
        self.send(builder).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = join_path(&self.base_url, path);
        self.inner
            .request(method, url)
            .header(header::ACCEPT, "application/json")
    }

    async fn send<T>(&self, builder: reqwest::RequestBuilder) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await.map_err(ClientError::from)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::from)?;

        if bytes.is_empty() {
            return Err(ClientError::EmptyResponse(status));
        }

        if !status.is_success() {
            tracing::warn!(%status, "non-success status, decoding body anyway");
        }

        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }
}

impl DashboardApi for DashboardClient {
    fn fetch_dashboard(&self) -> LocalBoxFuture<'_, ClientResult<ApiEnvelope<DashboardSnapshot>>> {
        self.get_dashboard().boxed_local()
    }

    fn trigger_analysis(&self) -> LocalBoxFuture<'_, ClientResult<Value>> {
        self.post_run_analysis().boxed_local()
    }
}

/// Stand-in used when no HTTP client could be built at startup. Every call
/// fails, which the controllers already handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisconnectedApi;

impl DashboardApi for DisconnectedApi {
    fn fetch_dashboard(&self) -> LocalBoxFuture<'_, ClientResult<ApiEnvelope<DashboardSnapshot>>> {
        futures::future::ready(Err(ClientError::Unavailable)).boxed_local()
    }

    fn trigger_analysis(&self) -> LocalBoxFuture<'_, ClientResult<Value>> {
        futures::future::ready(Err(ClientError::Unavailable)).boxed_local()
    }
}

fn normalize_base_url(input: &str) -> String {
    input.trim_end_matches('/').to_string()
}

fn join_path(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url, path.trim_start_matches('/'))
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("empty response body: {0}")]
    EmptyResponse(StatusCode),
    #[error("client setup failed: {0}")]
    Setup(#[from] anyhow::Error),
    #[error("api client unavailable")]
    Unavailable,
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            Self::EmptyResponse(status) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn base_url_and_path_join_without_double_slashes() {
        let base = normalize_base_url("http://localhost:8000///");
        assert_eq!(base, "http://localhost:8000");
        assert_eq!(join_path(&base, "/api/dashboard"), "http://localhost:8000/api/dashboard");
        assert_eq!(join_path(&base, "api/run-analysis"), "http://localhost:8000/api/run-analysis");
    }

    #[test]
    fn envelope_without_data_decodes() {
        let envelope: ApiEnvelope<DashboardSnapshot> =
            serde_json::from_value(json!({ "success": false, "error": "boom" })).expect("decode");
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error, Some(json!("boom")));
    }

    #[test]
    fn empty_response_reports_its_status() {
        let err = ClientError::EmptyResponse(StatusCode::BAD_GATEWAY);
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(ClientError::Unavailable.status(), None);
    }

    #[test]
    fn disconnected_api_always_fails() {
        let api = DisconnectedApi;
        let fetched = futures::executor::block_on(api.fetch_dashboard());
        assert!(matches!(fetched, Err(ClientError::Unavailable)));
        let triggered = futures::executor::block_on(api.trigger_analysis());
        assert!(matches!(triggered, Err(ClientError::Unavailable)));
    }
}
