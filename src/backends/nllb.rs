use anyhow::Context;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::backends::{BackendLoader, TranslationBackend};
use crate::errors::BackendError;

/// Default NLLB model identifier
pub const DEFAULT_MODEL: &str = "facebook/nllb-200-distilled-600M";

/// Default endpoint of a local NLLB inference server
pub const DEFAULT_ENDPOINT: &str = "http://localhost:6060";

/// Translation request for the NLLB inference server
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate
    text: String,
    /// Source language code (e.g. "eng_Latn")
    source: String,
    /// Target language code (e.g. "spa_Latn")
    target: String,
    /// Model identifier to serve the request with
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
}

/// Translation response from the NLLB inference server
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Translated text, special tokens stripped, best candidate only
    pub translation: String,
    /// Model that served the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Server-side processing time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Health response from the NLLB inference server
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status string ("ok" when ready)
    pub status: String,
    /// Identifiers of the models the server has loaded
    #[serde(default)]
    pub models: Vec<String>,
}

/// Client for a running NLLB inference server
///
/// One translation per call, no retries: the session surfaces whatever
/// error the server produces.
#[derive(Debug, Clone)]
pub struct NllbClient {
    /// Base URL of the server
    base_url: String,
    /// Model identifier requests are made against
    model: String,
    /// HTTP client for making requests
    client: Client,
}

impl NllbClient {
    /// Create a new client from a validated base URL
    fn new(base_url: String, model: String, timeout_secs: u64) -> Self {
        Self {
            base_url,
            model,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Check that the server is up and serves the expected model
    pub async fn check_ready(&self) -> Result<(), BackendError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))?;

        if health.status != "ok" {
            return Err(BackendError::ModelUnavailable(format!(
                "server not ready: status '{}'",
                health.status
            )));
        }

        // An empty model list means the server does not report models;
        // trust it and let translate calls fail if the model is missing.
        if !health.models.is_empty() && !health.models.iter().any(|m| m == &self.model) {
            return Err(BackendError::ModelUnavailable(format!(
                "model '{}' is not loaded on {}",
                self.model, self.base_url
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl TranslationBackend for NllbClient {
    async fn generate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, BackendError> {
        let url = format!("{}/translate", self.base_url);
        let request = TranslateRequest {
            text: text.to_string(),
            source: source_code.to_string(),
            target: target_code.to_string(),
            model: Some(self.model.clone()),
        };

        debug!(
            "Requesting translation {} -> {} ({} chars)",
            source_code,
            target_code,
            text.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    BackendError::ConnectionError(e.to_string())
                } else {
                    BackendError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("NLLB server returned {}: {}", status, message);
            return Err(BackendError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let translated: TranslateResponse = response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))?;

        Ok(translated.translation)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

/// Loader for [`NllbClient`] backends
///
/// Holds the connection configuration; `load` verifies the server is
/// reachable and ready before handing out a backend.
pub struct NllbLoader {
    endpoint: String,
    model: String,
    timeout_secs: u64,
}

impl NllbLoader {
    /// Create a loader for the given endpoint and model
    ///
    /// The endpoint must be a valid http(s) URL; a trailing slash is
    /// stripped so request paths can be appended uniformly.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> anyhow::Result<Self> {
        let endpoint = endpoint.into();
        let url = Url::parse(&endpoint)
            .context(format!("Failed to parse backend endpoint URL: {}", endpoint))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("Backend endpoint must be http or https: {}", endpoint);
        }

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.into(),
            timeout_secs,
        })
    }

    /// The model identifier this loader is configured for
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl BackendLoader for NllbLoader {
    async fn load(&self) -> Result<Arc<dyn TranslationBackend>, BackendError> {
        let client = NllbClient::new(
            self.endpoint.clone(),
            self.model.clone(),
            self.timeout_secs,
        );
        client.check_ready().await?;
        Ok(Arc::new(client))
    }
}
