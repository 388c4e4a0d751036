//! Keyword-count sentiment classification.
//!
//! The text is lower-cased and every keyword of both sets is counted as a
//! plain substring. There are no word boundaries, so "sad" also matches
//! inside "sadly". Ties, including the 0/0 case, are `Neutral`.

pub mod keywords;

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use keywords::{KeywordHit, KeywordSet, Polarity, NEGATIVE, POSITIVE};

/// The three possible classification outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Display colour: dark green, dark red or amber.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Positive => "#2e7d32",
            Self::Negative => "#c62828",
            Self::Neutral => "#ff8f00",
        }
    }

    fn from_scores(positive_score: usize, negative_score: usize) -> Self {
        match positive_score.cmp(&negative_score) {
            std::cmp::Ordering::Greater => Self::Positive,
            std::cmp::Ordering::Less => Self::Negative,
            std::cmp::Ordering::Equal => Self::Neutral,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Positive, Self::Negative, Self::Neutral]
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown label '{s}'"))
    }
}

/// Scores and keyword hits behind a label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub label: Label,
    pub positive_score: usize,
    pub negative_score: usize,
    pub positive_hits: Vec<KeywordHit>,
    pub negative_hits: Vec<KeywordHit>,
}

/// Classify `text` as Positive, Negative or Neutral.
///
/// Total and side-effect free: any string, including an empty one, yields a label.
pub fn classify(text: &str) -> Label {
    let lowered = text.to_lowercase();
    let positive_score = POSITIVE.count_in(&lowered);
    let negative_score = NEGATIVE.count_in(&lowered);
    let label = Label::from_scores(positive_score, negative_score);
    debug!("[classify] +{positive_score} -{negative_score} => {label}");
    label
}

/// Like [`classify`], but keeps the scores and per-keyword hits.
pub fn analyze(text: &str) -> Analysis {
    let lowered = text.to_lowercase();
    let positive_hits = POSITIVE.hits_in(&lowered);
    let negative_hits = NEGATIVE.hits_in(&lowered);
    let positive_score = positive_hits.iter().map(|h| h.count).sum();
    let negative_score = negative_hits.iter().map(|h| h.count).sum();

    Analysis {
        label: Label::from_scores(positive_score, negative_score),
        positive_score,
        negative_score,
        positive_hits,
        negative_hits,
    }
}
