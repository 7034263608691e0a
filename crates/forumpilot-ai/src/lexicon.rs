//! Keyword lists shared by the heuristic classifier and the mock provider.

pub(crate) const POSITIVE: &[&str] = &[
    "amazing",
    "great",
    "excellent",
    "wonderful",
    "fantastic",
    "love",
    "perfect",
    "awesome",
    "brilliant",
    "thank",
    "happy",
    "glad",
    "pleased",
    "satisfied",
    "cool",
    "nice",
    "works",
    "solved",
    "fixed",
    "appreciate",
    "good",
    "best",
    "helpful",
];

pub(crate) const NEGATIVE: &[&str] = &[
    "terrible",
    "awful",
    "hate",
    "horrible",
    "disgusting",
    "worst",
    "stupid",
    "useless",
    "garbage",
    "sucks",
    "bad",
    "broken",
    "failed",
    "error",
    "problem",
    "wrong",
    "disappointed",
    "sad",
    "angry",
    "upset",
    "annoying",
    "frustrated",
    "issue",
];

/// Weight 3 each.
pub(crate) const HIGH_TOXICITY: &[&str] = &[
    "fuck",
    "shit",
    "bitch",
    "asshole",
    "damn",
    "hell",
    "crap",
    "idiot",
    "moron",
    "dumb",
    "pathetic",
    "loser",
    "trash",
    "worthless",
    "stupid",
    "fool",
    "jerk",
    "ass",
    "bastard",
    "piss",
    "cock",
    "dick",
];

/// Weight 1 each.
pub(crate) const MEDIUM_TOXICITY: &[&str] = &[
    "annoying",
    "frustrated",
    "irritating",
    "ridiculous",
    "nonsense",
    "waste",
    "pointless",
    "useless",
    "terrible",
    "awful",
    "horrible",
    "disgusting",
];

/// Explicit abusive imperatives, worth a +5 bonus.
pub(crate) const ABUSIVE_PHRASE: &str = r"(?i)\bfuck\s+you\b|\bgo\s+fuck\b|\bfucking\s+\w+";

pub(crate) const SOLUTION_HINT: &str = r"(?i)\b(solution|fix|solved|works|try|use)\b";

pub(crate) const HIGH_WEIGHT: u32 = 3;
pub(crate) const MEDIUM_WEIGHT: u32 = 1;
pub(crate) const ABUSIVE_BONUS: u32 = 5;
