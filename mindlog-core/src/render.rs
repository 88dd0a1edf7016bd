//! Pure text helpers for the sentences shown to the user.
//!
//! Insight sentences use Markdown emphasis, e.g.
//!   Your mood is, on average, **88% higher** on days you mention **social** activities. (Avg score: 5.00)

use crate::insights::Direction;

/// Renders the sentence for one category insight.
pub fn format_insight(
    direction: Direction,
    percent: i64,
    category: &str,
    average_with: f64,
) -> String {
    let category = category.to_lowercase();
    match direction {
        Direction::Higher => format!(
            "Your mood is, on average, **{percent}% higher** on days you mention **{category}** activities. (Avg score: {average_with:.2})"
        ),
        Direction::Lower => format!(
            "Your mood is, on average, **{percent}% lower** on days you mention **{category}**. (Avg score: {average_with:.2})"
        ),
    }
}

/// The context line handed to the companion for one insight.
pub fn format_companion_context(insight: &str) -> String {
    format!("Insight about the user: {insight}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_sentence_mentions_activities() {
        let s = format_insight(Direction::Higher, 12, "Activity", 5.6);
        assert_eq!(
            s,
            "Your mood is, on average, **12% higher** on days you mention **activity** activities. (Avg score: 5.60)"
        );
    }

    #[test]
    fn lower_sentence_drops_activities() {
        let s = format_insight(Direction::Lower, 70, "Work", 1.5);
        assert_eq!(
            s,
            "Your mood is, on average, **70% lower** on days you mention **work**. (Avg score: 1.50)"
        );
    }

    #[test]
    fn average_is_rounded_to_two_decimals() {
        let s = format_insight(Direction::Higher, 20, "Rest", 10.0 / 3.0);
        assert!(s.ends_with("(Avg score: 3.33)"));
    }

    #[test]
    fn companion_context_prefix() {
        assert_eq!(format_companion_context("x"), "Insight about the user: x");
    }
}
