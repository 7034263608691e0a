//! Thread summarization through the remote summarization model.

use std::sync::Arc;

use forumpilot_core::{Post, SummaryResult};
use forumpilot_inference::InferenceBackend;
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::heuristic::HeuristicClassifier;
use crate::shape;

const DEFAULT_CHAR_LIMIT: usize = 800;

pub struct ThreadSummarizer {
    backend: Arc<dyn InferenceBackend>,
    model: String,
    remote_enabled: bool,
    char_limit: usize,
    heuristic: &'static HeuristicClassifier,
}

impl ThreadSummarizer {
    pub fn new(backend: Arc<dyn InferenceBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
            remote_enabled: true,
            char_limit: DEFAULT_CHAR_LIMIT,
            heuristic: HeuristicClassifier::shared(),
        }
    }

    pub fn with_remote_enabled(mut self, enabled: bool) -> Self {
        self.remote_enabled = enabled;
        self
    }

    /// Maximum characters of transcript sent to the model.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    /// Summarize `posts`. Never fails: the structural heuristic summary of
    /// the full, untruncated thread is used whenever the model cannot answer.
    pub async fn summarize_thread(&self, posts: &[Post]) -> SummaryResult {
        if !self.remote_enabled {
            debug!("remote inference disabled, using structural summary");
        } else if posts.is_empty() {
            debug!("empty thread, using structural summary");
        } else {
            match self.remote_summary(posts).await {
                Ok(summary) => return SummaryResult::new(summary),
                Err(err) => {
                    warn!(model = %self.model, error = %err, "summarization failed, using structural summary");
                }
            }
        }

        self.heuristic.summarize(posts)
    }

    async fn remote_summary(&self, posts: &[Post]) -> Result<String, AnalysisError> {
        let transcript = transcript(posts);
        let input = truncate_chars(&transcript, self.char_limit);
        let response = self.backend.invoke(&self.model, input).await?;
        shape::summary_text(&response)
            .map(str::to_string)
            .ok_or(AnalysisError::MissingField("summary_text"))
    }
}

/// `"author: content"` for every post, joined by single spaces.
fn transcript(posts: &[Post]) -> String {
    posts
        .iter()
        .map(|p| format!("{}: {}", p.author, p.content))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first `limit` characters of `text`, cut on a char boundary.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
