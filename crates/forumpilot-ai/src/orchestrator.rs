//! Sentiment + toxicity analysis over two remote models with heuristic fallback.
//!
//! Both models are queried concurrently and joined settle-all: one call
//! failing never cancels the other. A response that is not a ranked label
//! array counts as a failed call. Results are merged per field:
//!
//! | sentiment call | toxicity call | result                                  |
//! |----------------|---------------|-----------------------------------------|
//! | ok             | ok            | remote sentiment, remote toxicity       |
//! | ok             | failed        | remote sentiment, heuristic toxicity    |
//! | failed         | ok            | Neutral, remote toxicity                |
//! | failed         | failed        | heuristic result wholesale              |

use std::sync::Arc;

use forumpilot_core::{ClassificationResult, Sentiment, Toxicity};
use forumpilot_inference::{InferenceBackend, InferenceError, ModelSet};
use serde_json::Value;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::heuristic::HeuristicClassifier;
use crate::shape;

pub struct Orchestrator {
    backend: Arc<dyn InferenceBackend>,
    models: ModelSet,
    remote_enabled: bool,
    heuristic: &'static HeuristicClassifier,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn InferenceBackend>, models: ModelSet) -> Self {
        Self {
            backend,
            models,
            remote_enabled: true,
            heuristic: HeuristicClassifier::shared(),
        }
    }

    /// Disable remote inference; every call is served by the heuristic.
    pub fn with_remote_enabled(mut self, enabled: bool) -> Self {
        self.remote_enabled = enabled;
        self
    }

    pub fn models(&self) -> &ModelSet {
        &self.models
    }

    /// Classify `text`. Never fails: any remote failure degrades to the heuristic.
    pub async fn analyze(&self, text: &str) -> ClassificationResult {
        if !self.remote_enabled {
            debug!("remote inference disabled, using heuristic");
            return self.heuristic.classify(text);
        }

        let sentiment_task = self.spawn_invoke(&self.models.sentiment, text);
        let toxicity_task = self.spawn_invoke(&self.models.toxicity, text);
        let (sentiment, toxicity) = futures::future::join(sentiment_task, toxicity_task).await;

        let sentiment = settle(sentiment).and_then(|response| {
            shape::sentiment_from_response(&response).ok_or(AnalysisError::MissingField("ranked label"))
        });
        let toxicity = settle(toxicity).and_then(|response| {
            shape::toxicity_from_response(&response).ok_or(AnalysisError::MissingField("toxicity score"))
        });
        self.merge(text, sentiment, toxicity)
    }

    /// Run one model invocation on its own task so it settles independently.
    fn spawn_invoke(
        &self,
        model: &str,
        text: &str,
    ) -> JoinHandle<Result<Value, InferenceError>> {
        let backend = Arc::clone(&self.backend);
        let model = model.to_string();
        let text = text.to_string();
        tokio::spawn(async move { backend.invoke(&model, &text).await })
    }

    fn merge(
        &self,
        text: &str,
        sentiment: Result<Sentiment, AnalysisError>,
        toxicity: Result<Toxicity, AnalysisError>,
    ) -> ClassificationResult {
        match (sentiment, toxicity) {
            (Err(sentiment_err), Err(toxicity_err)) => {
                warn!(
                    sentiment_error = %sentiment_err,
                    toxicity_error = %toxicity_err,
                    "both models failed, using heuristic analysis"
                );
                self.heuristic.classify(text)
            }
            (sentiment, toxicity) => {
                let sentiment = match sentiment {
                    Ok(sentiment) => sentiment,
                    Err(err) => {
                        warn!(model = %self.models.sentiment, error = %err, "sentiment model failed");
                        Sentiment::Neutral
                    }
                };
                let toxicity = match toxicity {
                    Ok(toxicity) => toxicity,
                    Err(err) => {
                        warn!(
                            model = %self.models.toxicity,
                            error = %err,
                            "toxicity model failed, using heuristic toxicity"
                        );
                        self.heuristic.classify(text).toxicity
                    }
                };
                ClassificationResult::new(sentiment, toxicity)
            }
        }
    }
}

/// Flatten a joined task outcome; a panicked or cancelled task is a failure.
fn settle(
    joined: Result<Result<Value, InferenceError>, JoinError>,
) -> Result<Value, AnalysisError> {
    Ok(joined??)
}
