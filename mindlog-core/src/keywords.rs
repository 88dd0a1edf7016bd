use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// A named group of keywords, e.g. `Work` → `meeting`, `deadline`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryDefinition {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// The four categories shipped when the configuration doesn't define its own.
pub fn default_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::new("Social", ["friend", "friends", "family", "party", "talked"]),
        CategoryDefinition::new("Activity", ["walk", "exercise", "gym", "run", "hike", "swim"]),
        CategoryDefinition::new("Rest", ["sleep", "rest", "nap", "relaxed", "calm"]),
        CategoryDefinition::new("Work", ["work", "meeting", "project", "deadline", "office"]),
    ]
}

/// A category compiled into a single whole-word, case-insensitive pattern.
///
/// `walk` matches "I walk daily" and "WALK." but not "walking" or "sidewalk":
/// the keyword must be a complete token delimited by `\b` on both sides.
/// Keywords are escaped, so `1.1` never matches "1x1".
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    name: String,
    /// `None` when the category has no usable keyword.
    pattern: Option<Regex>,
}

impl CategoryMatcher {
    pub fn new(category: &CategoryDefinition) -> Result<Self, regex::Error> {
        Ok(Self {
            name: category.name.clone(),
            pattern: compile(category.keywords.as_slice())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if `text` is non-empty and contains any keyword as a whole word.
    pub fn is_match(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match &self.pattern {
            Some(re) => re.is_match(text),
            None => false,
        }
    }
}

/// One-off check of `text` against a keyword set.
///
/// Prefer [`CategoryMatcher`] when checking many entries against the same set.
pub fn matches<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    match compile(keywords) {
        Ok(Some(re)) => !text.is_empty() && re.is_match(text),
        Ok(None) => false,
        Err(error) => {
            tracing::warn!(%error, "could not compile keyword pattern");
            false
        }
    }
}

fn compile<S: AsRef<str>>(keywords: &[S]) -> Result<Option<Regex>, regex::Error> {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .map(|k| regex::escape(&k))
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map(Some)
}
