//! Mapping from a sentiment classifier's output to a mood score.
//!
//! The classifier itself runs outside this crate. Star-rating models label
//! their output like `"4 stars"`; the leading number is the score.

use crate::config::Policy;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-?\d+)").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// 4 and up is positive, 2 and below negative, anything else neutral.
    pub fn from_score(score: i64) -> Self {
        if score >= 4 {
            Sentiment::Positive
        } else if score <= 2 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Reads the score out of a classifier label such as `"4 stars"`.
///
/// Labels without a leading number give the neutral score; numbers outside
/// the policy range are clamped into it.
pub fn score_from_label(label: &str, policy: &Policy) -> i64 {
    let parsed = LEADING_NUMBER
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok());

    match parsed {
        Some(score) => score.clamp(policy.min_score, policy.max_score),
        None => {
            tracing::debug!(label, "unrecognized sentiment label, using neutral score");
            policy.neutral_score
        }
    }
}
