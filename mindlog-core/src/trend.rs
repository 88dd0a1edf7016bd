use crate::config::Policy;
use crate::dates::parse_timestamp;
use crate::record::JournalRecord;
use chrono::NaiveDateTime;
use serde::Serialize;

pub const TREND_TITLE: &str = "Mood Trend Over Time";
pub const EMPTY_TREND_TITLE: &str = "Mood Trend Over Time (No data yet)";

/// One plotted record. `timestamp` is `None` for legacy records without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub timestamp: Option<String>,
    pub score: i64,
}

impl TrendPoint {
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }
}

/// Mood scores against time, in log order, ready for a plotting surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Mean score over all points, `None` for an empty series.
    pub fn average(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let sum: i64 = self.points.iter().map(|p| p.score).sum();
        Some(sum as f64 / self.points.len() as f64)
    }
}

/// Builds the trend series for `log`.
///
/// Exactly one point per record, in the order given; the stored timestamp is
/// kept as the x value rather than re-sequenced. An empty log yields an empty
/// series titled [`EMPTY_TREND_TITLE`].
pub fn render(log: &[JournalRecord], policy: &Policy) -> TrendSeries {
    let title = if log.is_empty() {
        EMPTY_TREND_TITLE
    } else {
        TREND_TITLE
    };

    TrendSeries {
        title: title.to_string(),
        x_label: "Date".to_string(),
        y_label: format!("Mood Score ({}-{})", policy.min_score, policy.max_score),
        points: log
            .iter()
            .map(|record| TrendPoint {
                timestamp: record.timestamp.clone(),
                score: record.score_or(policy),
            })
            .collect(),
    }
}
