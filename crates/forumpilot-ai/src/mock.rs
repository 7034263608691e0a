//! Secondary mock provider for demos without network access.
//!
//! Scores by plain substring containment, so it is noisier than
//! [`HeuristicClassifier`](crate::HeuristicClassifier): "class" counts as a
//! hit for "ass".

use std::sync::LazyLock;

use forumpilot_core::{ClassificationResult, Post, Sentiment, SummaryResult, Toxicity};
use regex::Regex;

use crate::lexicon;

static ABUSIVE_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(lexicon::ABUSIVE_PHRASE).expect("abusive phrase pattern is valid"));

/// Keyword-containment classifier with a templated bullet-point summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn classify(&self, content: &str) -> ClassificationResult {
        let lower = content.to_lowercase();
        let count = |words: &[&str]| words.iter().filter(|w| lower.contains(*w)).count() as u32;

        let positive = count(lexicon::POSITIVE);
        let negative = count(lexicon::NEGATIVE);
        let mut high = count(lexicon::HIGH_TOXICITY) * lexicon::HIGH_WEIGHT;
        let medium = count(lexicon::MEDIUM_TOXICITY) * lexicon::MEDIUM_WEIGHT;
        if ABUSIVE_PHRASE.is_match(content) {
            high += lexicon::ABUSIVE_BONUS;
        }

        let sentiment = match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        };

        let toxicity = if high >= 3 {
            Toxicity::High
        } else if high >= 1 || medium >= 2 {
            Toxicity::Medium
        } else {
            Toxicity::Low
        };

        ClassificationResult::new(sentiment, toxicity)
    }

    pub fn summarize(&self, posts: &[Post]) -> SummaryResult {
        let mut authors: Vec<&str> = Vec::new();
        for post in posts {
            if !authors.contains(&post.author.as_str()) {
                authors.push(&post.author);
            }
        }

        SummaryResult::new(format!(
            "• Discussion involves {} participants ({}) across {} posts\n\
             • Main topics discussed include technical issues, solutions, and community feedback\n\
             • Participants shared various perspectives and experiences related to the forum topic\n\
             • The conversation shows active engagement with multiple viewpoints presented\n\
             • Overall discussion demonstrates collaborative problem-solving and knowledge sharing",
            authors.len(),
            authors.join(", "),
            posts.len()
        ))
    }
}
