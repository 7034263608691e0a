//! Forum post types exchanged with the web UI.

use serde::{Deserialize, Serialize};

use crate::analysis::{ClassificationResult, Sentiment, Toxicity};

/// A single post in a thread, as submitted for summarization.
///
/// The UI sends its full post records; only `author` and `content` are read,
/// the remaining fields are tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub author: String,
    pub content: String,
}

impl Post {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
        }
    }
}

/// A newly created post stamped with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedPost {
    pub id: String,
    pub author: String,
    pub content: String,
    pub sentiment: Sentiment,
    pub toxicity: Toxicity,
    /// RFC 3339 UTC timestamp string.
    pub timestamp: String,
}

impl AnalyzedPost {
    pub fn classification(&self) -> ClassificationResult {
        ClassificationResult::new(self.sentiment, self.toxicity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_ignores_ui_only_fields() {
        let json = r#"{
            "id": "p1",
            "author": "Sarah Chen",
            "content": "React.memo really helps.",
            "sentiment": "Positive",
            "toxicity": "Low",
            "timestamp": "2 hours ago"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post, Post::new("Sarah Chen", "React.memo really helps."));
    }

    #[test]
    fn post_array_parses() {
        let json = r#"[
            {"author": "a", "content": "first"},
            {"author": "b", "content": "second"}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].author, "b");
    }

    #[test]
    fn analyzed_post_exposes_classification() {
        let post = AnalyzedPost {
            id: "p1700000000000".into(),
            author: "Mike Code".into(),
            content: "Virtual scrolling is a game changer!".into(),
            sentiment: Sentiment::Positive,
            toxicity: Toxicity::Low,
            timestamp: "2026-02-21T10:00:00Z".into(),
        };
        assert_eq!(
            post.classification(),
            ClassificationResult::new(Sentiment::Positive, Toxicity::Low)
        );
    }
}
