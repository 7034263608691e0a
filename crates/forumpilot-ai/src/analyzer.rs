//! Inbound façade: picks the provider path from [`Settings`] on every call.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use forumpilot_core::{AnalyzedPost, ClassificationResult, Post, Settings, SummaryResult};
use forumpilot_inference::{InferenceBackend, InferenceClient, ModelSet};
use tracing::{debug, info};

use crate::mock::MockProvider;
use crate::orchestrator::Orchestrator;
use crate::summarizer::ThreadSummarizer;

/// Sentiment/toxicity analysis and thread summarization behind one handle.
///
/// With `use_mock_provider` set, requests go to [`MockProvider`]; otherwise
/// they go through the remote pipeline, which itself honours
/// `use_remote_inference`. Every operation is total.
pub struct ContentAnalyzer {
    settings: Settings,
    orchestrator: Orchestrator,
    summarizer: ThreadSummarizer,
    mock: MockProvider,
}

impl ContentAnalyzer {
    /// Build an analyzer talking to the configured inference endpoint.
    pub fn from_settings(settings: Settings) -> Self {
        let backend = Arc::new(InferenceClient::from_settings(&settings));
        Self::new(settings, backend, ModelSet::default())
    }

    pub fn new(settings: Settings, backend: Arc<dyn InferenceBackend>, models: ModelSet) -> Self {
        let summarizer = ThreadSummarizer::new(Arc::clone(&backend), models.summarization.clone())
            .with_remote_enabled(settings.use_remote_inference)
            .with_char_limit(settings.summary_char_limit);
        let orchestrator =
            Orchestrator::new(backend, models).with_remote_enabled(settings.use_remote_inference);

        info!(
            remote = settings.use_remote_inference,
            mock = settings.use_mock_provider,
            "content analyzer ready"
        );
        Self {
            settings,
            orchestrator,
            summarizer,
            mock: MockProvider,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn analyze(&self, text: &str) -> ClassificationResult {
        if self.settings.use_mock_provider {
            debug!("analyzing with mock provider");
            return self.mock.classify(text);
        }
        self.orchestrator.analyze(text).await
    }

    pub async fn summarize_thread(&self, posts: &[Post]) -> SummaryResult {
        if self.settings.use_mock_provider {
            debug!("summarizing with mock provider");
            return self.mock.summarize(posts);
        }
        self.summarizer.summarize_thread(posts).await
    }

    /// Classify a new post and stamp it with an id and creation time.
    pub async fn analyze_post(&self, author: &str, content: &str) -> AnalyzedPost {
        let verdict = self.analyze(content).await;
        let now = Utc::now();
        let post = AnalyzedPost {
            id: format!("p{}", now.timestamp_millis()),
            author: author.to_string(),
            content: content.to_string(),
            sentiment: verdict.sentiment,
            toxicity: verdict.toxicity,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        info!(
            id = %post.id,
            author = %post.author,
            sentiment = %post.sentiment,
            toxicity = %post.toxicity,
            "post analyzed"
        );
        post
    }
}
