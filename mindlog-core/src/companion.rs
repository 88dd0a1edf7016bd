//! Opening turn for a conversational companion, grounded in the first insight.

use crate::insights::{Insight, InsightResult};
use crate::render::format_companion_context;
use serde::Serialize;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a caring and supportive wellness companion. \
Listen, offer a safe space for reflection and gentle encouragement. \
Never give medical advice, diagnoses or treatment plans. \
If the user mentions self-harm or a crisis, guide them to professional help right away.";

pub const DEFAULT_WELCOME: &str = "Hello! How are you feeling today?";

pub const INSIGHT_WELCOME: &str =
    "Hello! I was just reflecting on your recent journal entries and noticed something. How are you doing today?";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanionOpening {
    pub system_prompt: String,
    pub welcome_message: String,
    /// The insight the companion was asked to bring up, if any.
    pub insight: Option<Insight>,
}

impl CompanionOpening {
    /// Builds the opening from `base_prompt` and the current insights.
    ///
    /// Only the first insight (category order) is used. Sentinel results leave
    /// the prompt untouched.
    pub fn new(base_prompt: &str, insights: &InsightResult) -> Self {
        match insights.first() {
            Some(insight) => {
                let context = format_companion_context(&insight.message);
                Self {
                    system_prompt: format!(
                        "{base_prompt}\n\nCONTEXT FOR THIS CONVERSATION:\n- {context}\n- Gently and naturally bring this insight up early in the conversation."
                    ),
                    welcome_message: INSIGHT_WELCOME.to_string(),
                    insight: Some(insight.clone()),
                }
            }
            None => Self {
                system_prompt: base_prompt.to_string(),
                welcome_message: DEFAULT_WELCOME.to_string(),
                insight: None,
            },
        }
    }
}
