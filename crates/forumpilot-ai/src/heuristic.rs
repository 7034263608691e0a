//! Rule-based sentiment/toxicity classifier and structural thread summarizer.
//!
//! Used whenever the remote models are disabled or fail. Everything here is
//! synchronous, allocation-light and total: any input string produces a
//! result.

use std::collections::HashSet;
use std::sync::LazyLock;

use forumpilot_core::{ClassificationResult, Post, Sentiment, SummaryResult, Toxicity};
use regex::Regex;

use crate::lexicon;

/// Texts shorter than this that read as negative are at least Medium toxicity.
const SHORT_TEXT_CHARS: usize = 50;

static SHARED: LazyLock<HeuristicClassifier> = LazyLock::new(HeuristicClassifier::new);

/// Whole-word, case-insensitive keyword matcher. A trailing plural `s` is
/// accepted, so `idiot` also matches `idiots`.
struct KeywordSet {
    patterns: Vec<Regex>,
}

impl KeywordSet {
    fn new(words: &[&str]) -> Self {
        let patterns = words
            .iter()
            .map(|word| {
                Regex::new(&format!(r"(?i)\b{}s?\b", regex::escape(word)))
                    .expect("escaped keyword is a valid pattern")
            })
            .collect();
        Self { patterns }
    }

    /// Number of distinct keywords present in `text`.
    fn count_matches(&self, text: &str) -> u32 {
        self.patterns.iter().filter(|re| re.is_match(text)).count() as u32
    }
}

/// Keyword-scoring classifier.
///
/// Sentiment compares positive and negative keyword counts. Toxicity sums
/// weighted keyword hits (high 3, medium 1, abusive phrase +5): a score of 3
/// or more is High; 1 or more, or a short negative text, is Medium.
pub struct HeuristicClassifier {
    positive: KeywordSet,
    negative: KeywordSet,
    high_toxicity: KeywordSet,
    medium_toxicity: KeywordSet,
    abusive_phrase: Regex,
    solution_hint: Regex,
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self {
            positive: KeywordSet::new(lexicon::POSITIVE),
            negative: KeywordSet::new(lexicon::NEGATIVE),
            high_toxicity: KeywordSet::new(lexicon::HIGH_TOXICITY),
            medium_toxicity: KeywordSet::new(lexicon::MEDIUM_TOXICITY),
            abusive_phrase: Regex::new(lexicon::ABUSIVE_PHRASE)
                .expect("abusive phrase pattern is valid"),
            solution_hint: Regex::new(lexicon::SOLUTION_HINT)
                .expect("solution hint pattern is valid"),
        }
    }

    /// Process-wide instance; the patterns are compiled once.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        let sentiment = self.sentiment(text);
        let toxicity = self.toxicity(text, sentiment);
        ClassificationResult::new(sentiment, toxicity)
    }

    pub fn sentiment(&self, text: &str) -> Sentiment {
        let positive = self.positive.count_matches(text);
        let negative = self.negative.count_matches(text);

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }

    /// Weighted toxicity score before bucketing.
    pub fn toxicity_score(&self, text: &str) -> u32 {
        let mut score = self.high_toxicity.count_matches(text) * lexicon::HIGH_WEIGHT
            + self.medium_toxicity.count_matches(text) * lexicon::MEDIUM_WEIGHT;
        if self.abusive_phrase.is_match(text) {
            score += lexicon::ABUSIVE_BONUS;
        }
        score
    }

    fn toxicity(&self, text: &str, sentiment: Sentiment) -> Toxicity {
        let score = self.toxicity_score(text);
        // Terse hostile one-liners often carry no explicit profanity.
        let short_negative =
            sentiment == Sentiment::Negative && text.chars().count() < SHORT_TEXT_CHARS;

        if score >= 3 {
            Toxicity::High
        } else if score >= 1 || short_negative {
            Toxicity::Medium
        } else {
            Toxicity::Low
        }
    }

    /// Structural summary built from thread shape rather than meaning.
    ///
    /// Counts distinct authors, posts and whitespace-separated words, and
    /// looks for questions and solution-like vocabulary.
    pub fn summarize(&self, posts: &[Post]) -> SummaryResult {
        let authors: HashSet<&str> = posts.iter().map(|p| p.author.as_str()).collect();
        let total_words: usize = posts.iter().map(|p| p.content.split_whitespace().count()).sum();
        let has_questions = posts.iter().any(|p| p.content.contains('?'));
        let has_solutions = posts.iter().any(|p| self.solution_hint.is_match(&p.content));

        let closing = match (has_questions, has_solutions) {
            (true, true) => "Community members asked questions and provided helpful solutions.",
            (true, false) => "Multiple questions were raised seeking community assistance.",
            (false, true) => "Various solutions and recommendations were shared.",
            (false, false) => {
                "General discussion covering technical topics and community feedback."
            }
        };

        SummaryResult::new(format!(
            "Discussion with {} participants across {} posts ({} words). {}",
            authors.len(),
            posts.len(),
            total_words,
            closing
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> ClassificationResult {
        HeuristicClassifier::shared().classify(text)
    }

    #[test]
    fn enthusiastic_text_is_positive_and_clean() {
        let result = classify("This is amazing! I love how fast this works!");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.toxicity, Toxicity::Low);
    }

    #[test]
    fn insults_are_high_toxicity() {
        let result = classify("You're all complete idiots, this is useless garbage!");
        assert_eq!(result.toxicity, Toxicity::High);
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn short_frustration_is_medium() {
        let text = "I'm a bit frustrated, this seems broken.";
        assert!(text.len() < 50);
        let result = classify(text);
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.toxicity, Toxicity::Medium);
    }

    #[test]
    fn short_negative_without_toxic_terms_is_medium() {
        // "wrong" and "broken" are negative but carry no toxicity weight.
        let text = "This is wrong and broken.";
        assert_eq!(HeuristicClassifier::shared().toxicity_score(text), 0);
        assert_eq!(classify(text).toxicity, Toxicity::Medium);
    }

    #[test]
    fn long_negative_without_toxic_terms_is_low() {
        let text = "After upgrading, the build output looks wrong and the cache seems broken \
                    on every second run of the pipeline.";
        assert!(text.chars().count() >= 50);
        let result = classify(text);
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.toxicity, Toxicity::Low);
    }

    #[test]
    fn neutral_on_tie_and_on_no_matches() {
        assert_eq!(classify("The meeting is at noon.").sentiment, Sentiment::Neutral);
        assert_eq!(
            classify("Great idea but the docs are wrong.").sentiment,
            Sentiment::Neutral
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("AMAZING WORK, LOVE IT").sentiment, Sentiment::Positive);
        assert_eq!(classify("IDIOT").toxicity, Toxicity::High);
    }

    #[test]
    fn matching_respects_word_boundaries() {
        // "class", "hello" and "assume" contain toxic substrings but no toxic words.
        let text = "Hello, I assume this class is documented somewhere in the handbook.";
        assert_eq!(HeuristicClassifier::shared().toxicity_score(text), 0);
        assert_eq!(classify(text).toxicity, Toxicity::Low);
    }

    #[test]
    fn keyword_counts_once_per_text() {
        let clf = HeuristicClassifier::shared();
        assert_eq!(clf.toxicity_score("pointless"), 1);
        assert_eq!(clf.toxicity_score("pointless, pointless, pointless"), 1);
    }

    #[test]
    fn medium_terms_accumulate_to_high() {
        let clf = HeuristicClassifier::shared();
        let text = "Ridiculous, pointless nonsense.";
        assert_eq!(clf.toxicity_score(text), 3);
        assert_eq!(classify(text).toxicity, Toxicity::High);
    }

    #[test]
    fn abusive_phrase_adds_bonus() {
        let clf = HeuristicClassifier::shared();
        // "fuck" (3) + phrase bonus (5).
        assert_eq!(clf.toxicity_score("fuck you"), 8);
        assert_eq!(clf.toxicity_score("go fuck yourself"), 8);
        assert_eq!(classify("fuck you").toxicity, Toxicity::High);
    }

    #[test]
    fn empty_text_is_neutral_low() {
        assert_eq!(
            classify(""),
            ClassificationResult::new(Sentiment::Neutral, Toxicity::Low)
        );
    }

    // ── Summary tests ──

    fn thread() -> Vec<Post> {
        vec![
            Post::new("Sarah Chen", "How do I stop my list from re-rendering?"),
            Post::new("John Developer", "Try React.memo on the row component."),
            Post::new("Sarah Chen", "That worked, thanks!"),
        ]
    }

    #[test]
    fn summary_counts_authors_posts_and_words() {
        let summary = HeuristicClassifier::shared().summarize(&thread());
        assert!(
            summary
                .summary
                .starts_with("Discussion with 2 participants across 3 posts (17 words)."),
            "got {:?}",
            summary.summary
        );
    }

    #[test]
    fn summary_questions_and_solutions() {
        let summary = HeuristicClassifier::shared().summarize(&thread());
        assert!(
            summary
                .summary
                .ends_with("Community members asked questions and provided helpful solutions.")
        );
    }

    #[test]
    fn summary_questions_only() {
        let posts = vec![Post::new("a", "Anyone seen this before?")];
        let summary = HeuristicClassifier::shared().summarize(&posts);
        assert!(summary.summary.ends_with("seeking community assistance."));
    }

    #[test]
    fn summary_solutions_only() {
        let posts = vec![Post::new("a", "The solution is to pin the version.")];
        let summary = HeuristicClassifier::shared().summarize(&posts);
        assert!(summary.summary.ends_with("solutions and recommendations were shared."));
    }

    #[test]
    fn summary_general_discussion() {
        let posts = vec![Post::new("a", "Release notes are out.")];
        let summary = HeuristicClassifier::shared().summarize(&posts);
        assert!(summary.summary.ends_with("technical topics and community feedback."));
    }

    #[test]
    fn summary_of_empty_thread_is_valid() {
        let summary = HeuristicClassifier::shared().summarize(&[]);
        assert!(
            summary
                .summary
                .starts_with("Discussion with 0 participants across 0 posts (0 words).")
        );
    }

    #[test]
    fn summary_is_deterministic() {
        let clf = HeuristicClassifier::shared();
        assert_eq!(clf.summarize(&thread()), clf.summarize(&thread()));
    }
}
