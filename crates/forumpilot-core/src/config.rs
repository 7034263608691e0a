//! Environment-driven configuration.
//!
//! Every setting has a default, so an empty environment yields a working
//! configuration that talks to the public inference endpoint.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_BACKOFF_MS: u64 = 500;
pub const DEFAULT_CACHE_TTL_MS: u64 = 300_000;
pub const DEFAULT_SUMMARY_CHARS: usize = 800;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} (expected an unsigned integer)")]
    InvalidNumber { key: &'static str, value: String },
}

/// Runtime settings for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// When false, every request is served by the local heuristic.
    pub use_remote_inference: bool,
    /// Route requests to the secondary mock provider instead of the pipeline.
    pub use_mock_provider: bool,
    /// Base URL of the inference API, without trailing slash.
    pub inference_url: String,
    /// Optional bearer token for the inference API.
    pub api_token: Option<String>,
    /// Wall-clock deadline for a single HTTP attempt.
    pub request_timeout: Duration,
    /// Retries allowed on 503/429 after the first attempt.
    pub max_retries: u32,
    /// Fixed delay between retries.
    pub retry_backoff: Duration,
    pub cache_ttl: Duration,
    /// Character budget for the text sent to the summarization model.
    pub summary_char_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_remote_inference: true,
            use_mock_provider: false,
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            api_token: None,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: Duration::from_millis(DEFAULT_BACKOFF_MS),
            cache_ttl: Duration::from_millis(DEFAULT_CACHE_TTL_MS),
            summary_char_limit: DEFAULT_SUMMARY_CHARS,
        }
    }
}

impl Settings {
    /// Build settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// `USE_HUGGINGFACE` disables remote inference only when set to the literal
    /// `false`; `USE_MOCK_AI` enables the mock provider only when set to the
    /// literal `true`. Empty strings count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let settings = Self {
            use_remote_inference: get("USE_HUGGINGFACE").as_deref() != Some("false"),
            use_mock_provider: get("USE_MOCK_AI").as_deref() == Some("true"),
            inference_url: get("HF_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.inference_url),
            api_token: get("HF_API_TOKEN"),
            request_timeout: parse_millis(get("FORUMPILOT_TIMEOUT_MS"), "FORUMPILOT_TIMEOUT_MS")?
                .unwrap_or(defaults.request_timeout),
            max_retries: parse_number(get("FORUMPILOT_MAX_RETRIES"), "FORUMPILOT_MAX_RETRIES")?
                .unwrap_or(defaults.max_retries),
            retry_backoff: parse_millis(get("FORUMPILOT_BACKOFF_MS"), "FORUMPILOT_BACKOFF_MS")?
                .unwrap_or(defaults.retry_backoff),
            cache_ttl: parse_millis(get("FORUMPILOT_CACHE_TTL_MS"), "FORUMPILOT_CACHE_TTL_MS")?
                .unwrap_or(defaults.cache_ttl),
            summary_char_limit: parse_number(
                get("FORUMPILOT_SUMMARY_CHARS"),
                "FORUMPILOT_SUMMARY_CHARS",
            )?
            .unwrap_or(defaults.summary_char_limit),
        };

        debug!(
            remote = settings.use_remote_inference,
            mock = settings.use_mock_provider,
            url = %settings.inference_url,
            "loaded settings"
        );
        Ok(settings)
    }
}

fn parse_number<T: std::str::FromStr>(
    value: Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidNumber { key, value: v })
        })
        .transpose()
}

fn parse_millis(value: Option<String>, key: &'static str) -> Result<Option<Duration>, ConfigError> {
    Ok(parse_number::<u64>(value, key)?.map(Duration::from_millis))
}
