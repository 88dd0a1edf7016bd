//! The on-disk shape of a single mood log record.
//!
//! Records written by this crate always carry all three fields. Older logs (or
//! hand-edited ones) may not, so every field is optional and decoding never
//! rejects a record because one field has the wrong type: the field is simply
//! treated as absent and readers substitute a default.

use crate::config::Policy;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// Free text as written by the user.
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry: Option<String>,
    /// Mood score handed over by the sentiment classifier.
    #[serde(
        default,
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<i64>,
    /// `YYYY-MM-DD HH:MM:SS`, see [`crate::dates::TIMESTAMP_FORMAT`].
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
}

impl JournalRecord {
    pub fn new(entry: impl Into<String>, score: i64, timestamp: impl Into<String>) -> Self {
        Self {
            entry: Some(entry.into()),
            score: Some(score),
            timestamp: Some(timestamp.into()),
        }
    }

    /// The entry text, or `""` when the record has none.
    pub fn text(&self) -> &str {
        self.entry.as_deref().unwrap_or_default()
    }

    /// The stored score when it is present and inside the policy range,
    /// otherwise the policy's neutral score.
    pub fn score_or(&self, policy: &Policy) -> i64 {
        self.score
            .filter(|score| policy.contains(*score))
            .unwrap_or(policy.neutral_score)
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.round() as i64)
        }),
        _ => None,
    })
}
