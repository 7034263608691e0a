//! Analysis layer: remote model orchestration with a local heuristic fallback.

mod analyzer;
mod error;
pub mod heuristic;
mod lexicon;
pub mod mock;
mod orchestrator;
pub mod shape;
mod summarizer;

pub use analyzer::ContentAnalyzer;
pub use error::AnalysisError;
pub use heuristic::HeuristicClassifier;
pub use mock::MockProvider;
pub use orchestrator::Orchestrator;
pub use summarizer::ThreadSummarizer;

#[cfg(test)]
mod testing;
