//! Readers that normalize inference API response bodies.
//!
//! Classification models answer with ranked label arrays, either nested
//! (`[[{"label": .., "score": ..}, ..]]`) or flat (`[{..}, ..]`);
//! summarization models answer with `[{"summary_text": ..}]`. Anything else
//! reads as `None`, which callers treat as a failed call.

use forumpilot_core::{Sentiment, Toxicity};
use serde_json::Value;

/// One entry of a ranked label array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedLabel<'a> {
    pub label: &'a str,
    pub score: f64,
}

/// The highest-scoring label of a classification response.
///
/// Entries without a string label and a numeric score are skipped. Ties
/// keep the earlier entry, so an already-sorted response yields its first
/// element.
pub fn top_label(response: &Value) -> Option<RankedLabel<'_>> {
    let outer = response.as_array()?;
    let ranked = match outer.first()? {
        Value::Array(inner) => inner,
        Value::Object(_) => outer,
        _ => return None,
    };

    ranked
        .iter()
        .filter_map(|entry| {
            let label = entry.get("label")?.as_str()?;
            let score = entry.get("score")?.as_f64()?;
            Some(RankedLabel { label, score })
        })
        .fold(None, |best: Option<RankedLabel<'_>>, candidate| match best {
            Some(b) if b.score >= candidate.score => Some(b),
            _ => Some(candidate),
        })
}

/// Map a sentiment model label onto [`Sentiment`].
///
/// Understands both the `LABEL_n` ids of the twitter-roberta checkpoints
/// and plain `positive`/`negative` names, case-insensitively.
pub fn sentiment_from_label(label: &str) -> Sentiment {
    if label.eq_ignore_ascii_case("LABEL_2") || label.eq_ignore_ascii_case("POSITIVE") {
        Sentiment::Positive
    } else if label.eq_ignore_ascii_case("LABEL_0") || label.eq_ignore_ascii_case("NEGATIVE") {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Sentiment of a classification response, or `None` when it is not a
/// ranked label array.
pub fn sentiment_from_response(response: &Value) -> Option<Sentiment> {
    top_label(response).map(|top| sentiment_from_label(top.label))
}

/// Toxicity of a classification response from its top-ranked score.
pub fn toxicity_from_response(response: &Value) -> Option<Toxicity> {
    top_label(response).map(|top| Toxicity::from_score(top.score))
}

/// The generated summary as sent, if present and not blank.
pub fn summary_text(response: &Value) -> Option<&str> {
    let candidate = match response {
        Value::Array(items) => items.first()?.get("summary_text")?,
        Value::Object(_) => response.get("summary_text")?,
        _ => return None,
    };
    candidate.as_str().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn top_label_nested() {
        let response = json!([[
            {"label": "positive", "score": 0.91},
            {"label": "neutral", "score": 0.07},
            {"label": "negative", "score": 0.02}
        ]]);
        let top = top_label(&response).unwrap();
        assert_eq!(top.label, "positive");
        assert!((top.score - 0.91).abs() < 1e-9);
    }

    #[test]
    fn top_label_flat_and_unsorted() {
        let response = json!([
            {"label": "LABEL_1", "score": 0.2},
            {"label": "LABEL_0", "score": 0.7},
            {"label": "LABEL_2", "score": 0.1}
        ]);
        assert_eq!(top_label(&response).unwrap().label, "LABEL_0");
    }

    #[test]
    fn top_label_rejects_other_shapes() {
        assert!(top_label(&json!({"error": "Model is loading"})).is_none());
        assert!(top_label(&json!([])).is_none());
        assert!(top_label(&json!([[]])).is_none());
        assert!(top_label(&json!(["positive"])).is_none());
        assert!(top_label(&json!([[{"score": 0.9}]])).is_none());
    }

    #[test]
    fn missing_score_is_unreadable() {
        let response = json!([[{"label": "toxic"}]]);
        assert!(top_label(&response).is_none());
        assert_eq!(toxicity_from_response(&response), None);
        assert_eq!(
            toxicity_from_response(&json!([[{"label": "toxic", "score": "high"}]])),
            None
        );
    }

    #[test]
    fn unscored_entries_are_skipped() {
        let response = json!([[{"label": "LABEL_2"}, {"label": "LABEL_0", "score": 0.4}]]);
        assert_eq!(top_label(&response).unwrap().label, "LABEL_0");
    }

    #[test]
    fn sentiment_labels() {
        assert_eq!(sentiment_from_label("LABEL_2"), Sentiment::Positive);
        assert_eq!(sentiment_from_label("POSITIVE"), Sentiment::Positive);
        assert_eq!(sentiment_from_label("positive"), Sentiment::Positive);
        assert_eq!(sentiment_from_label("LABEL_0"), Sentiment::Negative);
        assert_eq!(sentiment_from_label("negative"), Sentiment::Negative);
        assert_eq!(sentiment_from_label("LABEL_1"), Sentiment::Neutral);
        assert_eq!(sentiment_from_label("neutral"), Sentiment::Neutral);
        assert_eq!(sentiment_from_label("something-else"), Sentiment::Neutral);
    }

    #[test]
    fn unreadable_responses_are_none() {
        assert_eq!(sentiment_from_response(&json!({"error": "x"})), None);
        assert_eq!(sentiment_from_response(&json!([])), None);
        assert_eq!(toxicity_from_response(&json!({"error": "Model is loading"})), None);
        assert_eq!(
            sentiment_from_response(&json!([[{"label": "negative", "score": 0.8}]])),
            Some(Sentiment::Negative)
        );
    }

    #[test]
    fn toxicity_from_top_score() {
        assert_eq!(
            toxicity_from_response(&json!([[{"label": "toxic", "score": 0.8}]])),
            Some(Toxicity::High)
        );
        assert_eq!(
            toxicity_from_response(&json!([[{"label": "toxic", "score": 0.3}]])),
            Some(Toxicity::Medium)
        );
        assert_eq!(
            toxicity_from_response(&json!([[{"label": "toxic", "score": 0.1}]])),
            Some(Toxicity::Low)
        );
    }

    #[test]
    fn summary_text_shapes() {
        assert_eq!(
            summary_text(&json!([{"summary_text": "Users discuss memoization."}])),
            Some("Users discuss memoization.")
        );
        assert_eq!(
            summary_text(&json!({"summary_text": "Flat object."})),
            Some("Flat object.")
        );
        assert_eq!(
            summary_text(&json!([{"summary_text": "  Padded summary.\n"}])),
            Some("  Padded summary.\n")
        );
        assert_eq!(summary_text(&json!([{"summary_text": "   "}])), None);
        assert_eq!(summary_text(&json!([{"generated_text": "x"}])), None);
        assert_eq!(summary_text(&json!([])), None);
        assert_eq!(summary_text(&json!("plain string")), None);
    }
}
