pub mod analysis;
pub mod config;
pub mod post;

pub use analysis::{ClassificationResult, Sentiment, SummaryResult, Toxicity};
pub use config::{ConfigError, Settings};
pub use post::{AnalyzedPost, Post};
