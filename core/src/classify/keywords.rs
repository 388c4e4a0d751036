//! The two fixed keyword sets used for scoring.
//!
//! Matching is plain substring counting over lower-cased text, so every
//! keyword here must already be lowercase.

use serde::Serialize;

/// Which side of the score a keyword set contributes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// A keyword together with how many times it occurred in a text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeywordHit {
    pub keyword: &'static str,
    pub count: usize,
}

/// An immutable list of lowercase words associated with one polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordSet {
    pub polarity: Polarity,
    words: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(polarity: Polarity, words: &'static [&'static str]) -> Self {
        Self { polarity, words }
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of non-overlapping substring occurrences of every keyword.
    ///
    /// `lowered` must already be lower-cased; each keyword is counted
    /// independently, so "disliked" counts for "dislike" even if another
    /// keyword shares its letters.
    pub fn count_in(&self, lowered: &str) -> usize {
        self.words
            .iter()
            .map(|word| lowered.matches(word).count())
            .sum()
    }

    /// Per-keyword counts for the keywords that occur at least once, in list order.
    pub fn hits_in(&self, lowered: &str) -> Vec<KeywordHit> {
        self.words
            .iter()
            .filter_map(|&keyword| {
                let count = lowered.matches(keyword).count();
                (count > 0).then_some(KeywordHit { keyword, count })
            })
            .collect()
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "awesome",
    "excellent",
    "love",
    "happy",
    "pleased",
    "satisfied",
    "wonderful",
    "amazing",
    "fantastic",
    "superb",
    "joy",
    "delight",
    "breathtaking",
    "impressed",
    "recommend",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "hate",
    "dislike",
    "sad",
    "disappointed",
    "unsatisfied",
    "poor",
    "subpar",
    "worst",
    "lousy",
    "garbage",
    "waste",
    "avoid",
    "problem",
];

pub const POSITIVE: KeywordSet = KeywordSet::new(Polarity::Positive, POSITIVE_WORDS);
pub const NEGATIVE: KeywordSet = KeywordSet::new(Polarity::Negative, NEGATIVE_WORDS);

/// Look up a keyword set by its polarity name ("positive" / "negative").
pub fn by_name(name: &str) -> Option<KeywordSet> {
    [POSITIVE, NEGATIVE]
        .into_iter()
        .find(|set| set.polarity.as_str().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercase() {
        for set in [POSITIVE, NEGATIVE] {
            for word in set.words() {
                assert_eq!(*word, word.to_lowercase(), "{word} is not lowercase");
            }
        }
    }

    #[test]
    fn test_count_is_substring_based() {
        assert_eq!(NEGATIVE.count_in("sadly, i was sad"), 2);
        assert_eq!(NEGATIVE.count_in("i disliked it"), 1);
    }

    #[test]
    fn test_count_is_non_overlapping() {
        let set = KeywordSet::new(Polarity::Positive, &["aa"]);
        assert_eq!(set.count_in("aaaa"), 2);
        assert_eq!(set.count_in("aaa"), 1);
    }

    #[test]
    fn test_duplicate_keywords_inflate_count() {
        let set = KeywordSet::new(Polarity::Negative, &["bad", "bad"]);
        assert_eq!(set.count_in("bad"), 2);
    }

    #[test]
    fn test_hits_skip_missing_keywords() {
        let hits = POSITIVE.hits_in("good good great");
        assert_eq!(
            hits,
            vec![
                KeywordHit {
                    keyword: "good",
                    count: 2
                },
                KeywordHit {
                    keyword: "great",
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_polarity_names() {
        assert_eq!(POSITIVE.polarity.as_str(), "positive");
        assert_eq!(NEGATIVE.polarity.as_str(), "negative");
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("positive"), Some(POSITIVE));
        assert_eq!(by_name("NEGATIVE"), Some(NEGATIVE));
        assert_eq!(by_name("neutral"), None);
    }
}
