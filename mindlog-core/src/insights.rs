//! Correlates keyword categories with mood.
//!
//! For every category the log is split into records that mention it and
//! records that don't. When the mean score of the first group differs from
//! the second by more than the policy band, an [`Insight`] is reported.

use crate::config::Policy;
use crate::keywords::{CategoryDefinition, CategoryMatcher};
use crate::record::JournalRecord;
use crate::render::format_insight;
use serde::Serialize;
use strum_macros::{AsRefStr, Display};

pub const NO_ENTRIES_MESSAGE: &str = "No journal entries found yet.";
pub const NO_CORRELATIONS_MESSAGE: &str =
    "No strong correlations found yet. Keep journaling to discover more about your patterns!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Higher,
    Lower,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub category: String,
    pub direction: Direction,
    /// Relative difference between the two group means, in whole percent.
    pub percent: i64,
    /// Mean score of records mentioning the category.
    pub average_with: f64,
    /// Mean score of the other records (equal to `average_with` when there are none).
    pub average_without: f64,
    /// Number of records mentioning the category.
    pub matched: usize,
    pub message: String,
}

/// Outcome of an insight pass.
///
/// `Found` keeps category-definition order, so the first element is the one a
/// companion should bring up.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "insights", rename_all = "snake_case")]
pub enum InsightResult {
    /// The log is empty.
    NoEntries,
    /// There are entries but every category stayed inside the policy band.
    NoStrongCorrelations,
    Found(Vec<Insight>),
}

impl InsightResult {
    pub fn insights(&self) -> &[Insight] {
        match self {
            InsightResult::Found(insights) => insights,
            _ => &[],
        }
    }

    /// The first insight in category order.
    pub fn first(&self) -> Option<&Insight> {
        self.insights().first()
    }

    /// The insight for `category`, if that category produced one.
    pub fn get(&self, category: &str) -> Option<&Insight> {
        self.insights().iter().find(|i| i.category == category)
    }

    /// The placeholder text for the two "nothing to report" states.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            InsightResult::NoEntries => Some(NO_ENTRIES_MESSAGE),
            InsightResult::NoStrongCorrelations => Some(NO_CORRELATIONS_MESSAGE),
            InsightResult::Found(_) => None,
        }
    }
}

/// Running sum and count of scores.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    sum: i64,
    count: usize,
}

impl Tally {
    fn add(&mut self, score: i64) {
        self.sum += score;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}

#[derive(Debug, Clone)]
struct CategoryTally {
    matcher: CategoryMatcher,
    with: Tally,
    without: Tally,
}

/// Per-category running totals, folded one record at a time.
///
/// Only sums and counts are kept, so the ratios are derived in
/// [`finish`](Self::finish) and the result equals a full recomputation over
/// the same records.
#[derive(Debug, Clone)]
pub struct CorrelationTally {
    policy: Policy,
    categories: Vec<CategoryTally>,
    records: usize,
}

impl CorrelationTally {
    pub fn new(categories: &[CategoryDefinition], policy: Policy) -> Self {
        let categories = categories
            .iter()
            .filter_map(|category| match CategoryMatcher::new(category) {
                Ok(matcher) => Some(CategoryTally {
                    matcher,
                    with: Tally::default(),
                    without: Tally::default(),
                }),
                Err(error) => {
                    tracing::warn!(category = %category.name, %error, "skipping category");
                    None
                }
            })
            .collect();

        Self {
            policy,
            categories,
            records: 0,
        }
    }

    /// Number of records observed so far.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn observe(&mut self, record: &JournalRecord) {
        let text = record.text();
        let score = record.score_or(&self.policy);
        self.records += 1;

        for category in &mut self.categories {
            if category.matcher.is_match(text) {
                category.with.add(score);
            } else {
                category.without.add(score);
            }
        }
    }

    pub fn finish(&self) -> InsightResult {
        if self.records == 0 {
            return InsightResult::NoEntries;
        }

        let insights: Vec<Insight> = self
            .categories
            .iter()
            .filter_map(|category| self.evaluate(category))
            .collect();

        if insights.is_empty() {
            InsightResult::NoStrongCorrelations
        } else {
            InsightResult::Found(insights)
        }
    }

    fn evaluate(&self, category: &CategoryTally) -> Option<Insight> {
        let name = category.matcher.name();
        let average_with = category.with.mean()?;
        // No contrasting group: compare against itself, which never passes the band.
        let average_without = category.without.mean().unwrap_or(average_with);

        let (direction, percent) = if average_with > average_without * self.policy.higher_ratio {
            let ratio = average_with / average_without;
            (Direction::Higher, ((ratio - 1.0) * 100.0).round() as i64)
        } else if average_with < average_without * self.policy.lower_ratio {
            let ratio = average_with / average_without;
            (Direction::Lower, ((1.0 - ratio) * 100.0).round() as i64)
        } else {
            tracing::debug!(category = name, average_with, average_without, "within band");
            return None;
        };

        tracing::debug!(category = name, %direction, percent, "insight");
        Some(Insight {
            category: name.to_string(),
            direction,
            percent,
            average_with,
            average_without,
            matched: category.with.count,
            message: format_insight(direction, percent, name, average_with),
        })
    }
}

/// Produces insights for `log` against `categories`, in category order.
///
/// Recomputed from scratch on every call. Never fails: empty or malformed
/// input degrades to [`InsightResult::NoEntries`] or
/// [`InsightResult::NoStrongCorrelations`].
pub fn generate(
    log: &[JournalRecord],
    categories: &[CategoryDefinition],
    policy: &Policy,
) -> InsightResult {
    let mut tally = CorrelationTally::new(categories, *policy);
    for record in log {
        tally.observe(record);
    }
    tally.finish()
}
