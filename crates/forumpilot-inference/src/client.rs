//! HTTP client for the hosted inference API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use forumpilot_core::Settings;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, ResponseCache};
use crate::error::InferenceError;

/// Anything that can run a named model over a text input and return its raw
/// JSON response.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn invoke(&self, model: &str, input: &str) -> Result<Value, InferenceError>;
}

/// Fixed-delay retry for cold-loading (503) and rate-limited (429) responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    fn is_retryable(status: u16) -> bool {
        matches!(status, 429 | 503)
    }
}

/// Inference client with a shared response cache.
///
/// Each attempt is bounded by its own deadline; when it expires the request
/// future is dropped, which aborts the connection.
pub struct InferenceClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    timeout: Duration,
    retry: RetryPolicy,
    cache: Arc<ResponseCache>,
}

impl InferenceClient {
    /// Create a client for the given base URL with default timeout, retry
    /// policy and a fresh five-minute cache.
    ///
    /// `base_url` should be like `https://api-inference.huggingface.co/models`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: None,
            timeout: Duration::from_secs(3),
            retry: RetryPolicy::default(),
            cache: Arc::new(ResponseCache::new(Duration::from_secs(300))),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            api_token: settings.api_token.clone(),
            timeout: settings.request_timeout,
            retry: RetryPolicy {
                max_retries: settings.max_retries,
                backoff: settings.retry_backoff,
            },
            cache: Arc::new(ResponseCache::new(settings.cache_ttl)),
            ..Self::new(settings.inference_url.clone())
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Share an existing cache, e.g. between several clients in one process.
    pub fn with_cache(mut self, cache: Arc<ResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run `model` over `input`, serving from the cache when possible.
    ///
    /// Only successful responses are cached.
    pub async fn invoke(&self, model: &str, input: &str) -> Result<Value, InferenceError> {
        let input = Value::String(input.to_string());
        let key = CacheKey::new(model, &input);
        if let Some(cached) = self.cache.get(&key) {
            debug!(model, "inference cache hit");
            return Ok(cached);
        }

        let url = format!("{}/{}", self.base_url, model);
        let body = json!({
            "inputs": input,
            "options": { "wait_for_model": false },
        });

        let mut retries_left = self.retry.max_retries;
        loop {
            match self.attempt(&url, &body).await {
                Ok(value) => {
                    self.cache.put(key, value.clone());
                    return Ok(value);
                }
                Err(InferenceError::Upstream { status })
                    if RetryPolicy::is_retryable(status) && retries_left > 0 =>
                {
                    retries_left -= 1;
                    warn!(
                        model,
                        status,
                        retries_left,
                        backoff_ms = self.retry.backoff.as_millis() as u64,
                        "model unavailable, retrying"
                    );
                    tokio::time::sleep(self.retry.backoff).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// A single time-boxed POST.
    async fn attempt(&self, url: &str, body: &Value) -> Result<Value, InferenceError> {
        let request = async {
            info!(url = %url, "querying inference API");
            let mut req = self.client.post(url).json(body);
            if let Some(token) = &self.api_token {
                req = req.bearer_auth(token);
            }

            let resp = req.send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(InferenceError::Upstream {
                    status: status.as_u16(),
                });
            }

            let bytes = resp.bytes().await?;
            serde_json::from_slice::<Value>(&bytes)
                .map_err(|e| InferenceError::MalformedResponse(e.to_string()))
        };

        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| InferenceError::Timeout {
                after: self.timeout,
            })?
    }
}

#[async_trait]
impl InferenceBackend for InferenceClient {
    async fn invoke(&self, model: &str, input: &str) -> Result<Value, InferenceError> {
        InferenceClient::invoke(self, model, input).await
    }
}
