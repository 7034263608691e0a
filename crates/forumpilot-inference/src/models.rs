//! Model identifiers for each analysis task.

pub const SENTIMENT_MODEL: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";
pub const TOXICITY_MODEL: &str = "unitary/toxic-bert-base-uncased";
pub const SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";

/// The model used for each task. Identifiers are path segments appended to
/// the inference base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSet {
    pub sentiment: String,
    pub toxicity: String,
    pub summarization: String,
}

impl Default for ModelSet {
    fn default() -> Self {
        Self {
            sentiment: SENTIMENT_MODEL.to_string(),
            toxicity: TOXICITY_MODEL.to_string(),
            summarization: SUMMARIZATION_MODEL.to_string(),
        }
    }
}
