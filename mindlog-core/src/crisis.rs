//! Crisis phrase detection for new journal entries.
//!
//! Unlike category matching this is a plain substring scan: "panicked" still
//! trips "panic".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helpline {
    pub name: String,
    pub number: String,
}

impl Helpline {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

/// Phrases that indicate distress, and who to call when one shows up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrisisCheck {
    pub keywords: Vec<String>,
    pub helplines: Vec<Helpline>,
}

impl Default for CrisisCheck {
    fn default() -> Self {
        Self {
            keywords: ["suicide", "kill myself", "hopeless", "depressed", "panic"]
                .into_iter()
                .map(String::from)
                .collect(),
            helplines: vec![
                Helpline::new("KIRAN", "1800 599 0019"),
                Helpline::new("AASRA", "91-9820466726"),
                Helpline::new("Snehi", "022-2772 6771"),
            ],
        }
    }
}

impl CrisisCheck {
    /// Returns the first configured phrase found in `text`, if any.
    pub fn triggered_by(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .find(|k| lower.contains(&k.to_lowercase()))
    }

    /// Returns the helplines to show when `text` contains a crisis phrase.
    pub fn check(&self, text: &str) -> Option<&[Helpline]> {
        self.triggered_by(text).map(|phrase| {
            tracing::debug!(phrase, "crisis phrase detected");
            self.helplines.as_slice()
        })
    }
}
