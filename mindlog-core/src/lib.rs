pub mod companion;
pub mod config;
pub mod crisis;
pub mod dates;
pub mod error;
pub mod insights;
pub mod journal;
pub mod keywords;
pub mod paths;
pub mod record;
pub mod render;
pub mod sentiment;
pub mod store;
pub mod trend;

#[cfg(test)]
mod tests;

pub use companion::CompanionOpening;
pub use config::{Config, Policy};
pub use crisis::{CrisisCheck, Helpline};
pub use error::{StoreError, StoreResult};
pub use insights::{CorrelationTally, Direction, Insight, InsightResult, generate};
pub use journal::MoodJournal;
pub use keywords::{CategoryDefinition, CategoryMatcher};
pub use record::JournalRecord;
pub use sentiment::Sentiment;
pub use store::MoodLog;
pub use trend::{TrendPoint, TrendSeries};
