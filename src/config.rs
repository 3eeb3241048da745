use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::parser::RecordParser;
use crate::generator::DirectionMode;
use crate::layout::LayoutConfig;
use crate::render::OutputFormat;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_quote")]
    pub quote: char,
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default = "default_direction_mode")]
    pub direction_mode: DirectionMode,
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
    #[serde(default = "default_labels")]
    pub labels: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_text_columns")]
    pub text_columns: usize,
    #[serde(default = "default_text_rows")]
    pub text_rows: usize,
    #[serde(default)]
    pub layout: LayoutConfig,
}

fn default_delimiter() -> char {
    ','
}
fn default_quote() -> char {
    '"'
}
fn default_question_count() -> usize {
    20
}
fn default_direction_mode() -> DirectionMode {
    DirectionMode::FrontToBack
}
fn default_output_format() -> OutputFormat {
    OutputFormat::Text
}
fn default_labels() -> String {
    "ja".to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_text_columns() -> usize {
    80
}
fn default_text_rows() -> usize {
    66
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            quote: default_quote(),
            question_count: default_question_count(),
            direction_mode: default_direction_mode(),
            output_format: default_output_format(),
            labels: default_labels(),
            output_dir: default_output_dir(),
            text_columns: default_text_columns(),
            text_rows: default_text_rows(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Read `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing config {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tango")
            .join("config.toml")
    }

    pub fn parser(&self) -> RecordParser {
        RecordParser::new(self.delimiter, self.quote)
    }
}
