use super::theme::Dusk;
use mindlog_core::{
    CompanionOpening, Helpline, InsightResult, JournalRecord, Policy, Sentiment, TrendSeries,
};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub policy: Policy,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Dusk::skin(),
            opts: config.unwrap_or(RenderOptions {
                use_color: true,
                policy: Policy::default(),
            }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_json(&self, value: &serde_json::Value) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn print_record_line(&self, record: &JournalRecord) {
        let score = record.score_or(&self.opts.policy);
        let mut timestamp = record.timestamp.clone().unwrap_or_else(|| "-".to_string());
        let mut mood = format!("{score} ({})", Sentiment::from_score(score));
        let mut text = record.text().to_string();
        if self.opts.use_color {
            timestamp = timestamp.with(Color::Cyan).to_string();
            mood = mood.with(self.mood_color(score)).to_string();
            text = text.with(Dusk::TEXT).to_string();
        }
        println!("{timestamp} {mood} - {text}");
    }

    pub fn print_helplines(&self, helplines: &[Helpline]) {
        let mut md = String::from(
            "# You don't have to go through this alone\nPlease consider reaching out for help right now:\n",
        );
        for helpline in helplines {
            md.push_str(&format!("* **{}**: {}\n", helpline.name, helpline.number));
        }
        self.print_md(&md);
    }

    pub fn print_trend(&self, series: &TrendSeries) {
        self.print_md(&format!("# {}", series.title));
        if series.is_empty() {
            self.print_info("Nothing to plot yet. Add an entry with `mindlog --score <n> <text>`.");
            return;
        }

        let width = series
            .points
            .iter()
            .map(|p| p.timestamp.as_deref().map_or(1, str::len))
            .max()
            .unwrap_or(1);
        println!("{:<width$}  {}", series.x_label, series.y_label);
        for point in &series.points {
            let x = point.timestamp.as_deref().unwrap_or("-");
            let mut bar = score_bar(point.score, &self.opts.policy);
            if self.opts.use_color {
                bar = bar.with(self.mood_color(point.score)).to_string();
            }
            println!("{x:<width$}  {bar} {}", point.score);
        }
        if let Some(average) = series.average() {
            self.print_md(&format!("\n*{} entries, average mood {average:.2}*", series.len()));
        }
    }

    pub fn print_insights(&self, result: &InsightResult) {
        if let Some(message) = result.sentinel() {
            self.print_info(message);
            return;
        }
        self.print_md("# Your Personalized Insights");
        for insight in result.insights() {
            self.print_md(&format!("* **{} Activities:** {}", insight.category, insight.message));
        }
    }

    pub fn print_companion(&self, opening: &CompanionOpening) {
        self.print_md(&format!("# Companion\n> {}\n", opening.welcome_message));
        self.print_md("## System prompt");
        println!("{}", opening.system_prompt);
    }

    fn mood_color(&self, score: i64) -> Color {
        Dusk::mood_color(score, self.opts.policy.min_score, self.opts.policy.max_score)
    }
}

/// A fixed-width bar: one filled cell per point above the minimum score.
fn score_bar(score: i64, policy: &Policy) -> String {
    let cells = (policy.max_score - policy.min_score + 1).max(1) as usize;
    let filled = ((score - policy.min_score + 1).clamp(0, cells as i64)) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(cells - filled))
}
