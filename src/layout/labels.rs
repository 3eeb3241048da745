use std::fs;

use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generator::Direction;

#[derive(Embed)]
#[folder = "assets/labels/"]
struct LabelAssets;

/// Every fixed string printed on a test sheet.
///
/// Templates may contain `{date}` (formatted with `date_format`) and
/// `{count}` (number of questions).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentLabels {
    pub name: String,
    pub title: String,
    pub date_line: String,
    pub count_line: String,
    pub name_field: String,
    pub score_field: String,
    pub front_to_back_hint: String,
    pub back_to_front_hint: String,
    pub answer_blank: String,
    pub answer_key_title: String,
    pub date_format: String,
    pub file_prefix: String,
}

impl DocumentLabels {
    pub fn load(name: &str) -> Option<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir
                .join("tango")
                .join("labels")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_path) {
                if let Ok(labels) = toml::from_str::<DocumentLabels>(&content) {
                    debug!(path = %user_path.display(), "loaded user labels");
                    return Some(labels);
                }
            }
        }

        Self::bundled(name)
    }

    /// Preset shipped with the binary, ignoring any user override.
    pub fn bundled(name: &str) -> Option<Self> {
        let file = LabelAssets::get(&format!("{name}.toml"))?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str(content).ok()
    }

    pub fn available() -> Vec<String> {
        LabelAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }

    pub fn hint(&self, direction: Direction) -> &str {
        match direction {
            Direction::FrontToBack => &self.front_to_back_hint,
            Direction::BackToFront => &self.back_to_front_hint,
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    /// Substitute `{date}` and `{count}` in `template`.
    pub fn fill(&self, template: &str, date: NaiveDate, count: usize) -> String {
        let mut out = template.replace("{count}", &count.to_string());
        if out.contains("{date}") {
            out = out.replace("{date}", &self.format_date(date));
        }
        out
    }
}

impl Default for DocumentLabels {
    fn default() -> Self {
        Self::load("ja").unwrap_or_else(|| Self {
            name: "builtin".to_string(),
            title: "Vocabulary Test".to_string(),
            date_line: "Date: {date}".to_string(),
            count_line: "Questions: {count}".to_string(),
            name_field: "Name: ___________________".to_string(),
            score_field: "Score: _____ / {count}".to_string(),
            front_to_back_hint: "(answer with the meaning)".to_string(),
            back_to_front_hint: "(answer with the word)".to_string(),
            answer_blank: "Answer: ___________________".to_string(),
            answer_key_title: "Answer Key".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            file_prefix: "vocabulary_test".to_string(),
        })
    }
}
