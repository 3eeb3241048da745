pub mod json;
pub mod text;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::{LayoutConfig, PagedDocument};

pub use json::JsonRenderer;
pub use text::TextRenderer;

/// Backend that turns placement commands into an output artifact.
pub trait DocumentRenderer {
    /// File extension of the produced artifact, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, doc: &PagedDocument, layout: &LayoutConfig) -> Result<Vec<u8>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn renderer(self, columns: usize, rows: usize) -> Box<dyn DocumentRenderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer::new(columns, rows)),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// `{prefix}_{YYYYMMDD}.{extension}`
pub fn artifact_filename(prefix: &str, date: NaiveDate, extension: &str) -> String {
    format!("{prefix}_{}.{extension}", date.format("%Y%m%d"))
}
