//! Service health report with the effective configuration.

use chrono::{SecondsFormat, Utc};
use forumpilot_core::Settings;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub message: String,
    /// RFC 3339 UTC timestamp string.
    pub timestamp: String,
    pub environment: EnvironmentReport,
}

/// Configuration summary. The API token is reported only as present/absent.
#[derive(Debug, Serialize)]
pub struct EnvironmentReport {
    pub inference_url: String,
    pub api_token: bool,
    pub use_huggingface: bool,
    pub use_mock_ai: bool,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub backoff_ms: u64,
    pub cache_ttl_ms: u64,
    pub summary_chars: usize,
}

impl HealthReport {
    /// Every setting has a usable default, so a loaded configuration is always healthy.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            status: "ok".to_string(),
            message: "forumpilot is running".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            environment: EnvironmentReport {
                inference_url: settings.inference_url.clone(),
                api_token: settings.api_token.is_some(),
                use_huggingface: settings.use_remote_inference,
                use_mock_ai: settings.use_mock_provider,
                timeout_ms: settings.request_timeout.as_millis() as u64,
                max_retries: settings.max_retries,
                backoff_ms: settings.retry_backoff.as_millis() as u64,
                cache_ttl_ms: settings.cache_ttl.as_millis() as u64,
                summary_chars: settings.summary_char_limit,
            },
        }
    }
}
