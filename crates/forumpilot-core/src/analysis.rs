//! Classification and summary result types shared by every provider.
//!
//! Serialized field values use the capitalised variant names (`"Positive"`,
//! `"High"`) that the web UI renders directly in its badges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse polarity of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse harmfulness of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Toxicity {
    #[default]
    Low,
    Medium,
    High,
}

impl Toxicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Bucket a toxic-class confidence score.
    ///
    /// `> 0.5` is High, `> 0.25` is Medium, anything else (including NaN) is Low.
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            Self::High
        } else if score > 0.25 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Toxicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment and toxicity verdict for a single text.
///
/// Both fields are always populated; each may come from the remote model or
/// from the local heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub sentiment: Sentiment,
    pub toxicity: Toxicity,
}

impl ClassificationResult {
    pub fn new(sentiment: Sentiment, toxicity: Toxicity) -> Self {
        Self {
            sentiment,
            toxicity,
        }
    }
}

/// Free-text summary of a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
}

impl SummaryResult {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}
