pub mod engine;
pub mod labels;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontTier {
    Title,
    SectionTitle,
    Prompt,
    Body,
    Hint,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// One piece of text at a fixed spot on one page. Coordinates are in page
/// units (millimetres with the default config), measured from the top-left.
/// For centered text `x` is the center line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementCommand {
    pub page_index: usize,
    pub x: f32,
    pub y: f32,
    pub tier: FontTier,
    pub align: Align,
    pub text: String,
}

/// Question section followed by the answer-key section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PagedDocument {
    pub page_count: usize,
    pub commands: Vec<PlacementCommand>,
}

impl PagedDocument {
    pub fn page(&self, page_index: usize) -> impl Iterator<Item = &PlacementCommand> {
        self.commands
            .iter()
            .filter(move |c| c.page_index == page_index)
    }
}

/// Values printed in the question header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestHeader {
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_page_width")]
    pub page_width: f32,
    #[serde(default = "default_page_height")]
    pub page_height: f32,
    #[serde(default = "default_left_margin")]
    pub left_margin: f32,
    #[serde(default = "default_indent")]
    pub indent: f32,
    #[serde(default = "default_right_column_x")]
    pub right_column_x: f32,
    #[serde(default = "default_title_y")]
    pub title_y: f32,
    #[serde(default = "default_meta_y")]
    pub meta_y: f32,
    #[serde(default = "default_meta_line_gap")]
    pub meta_line_gap: f32,
    #[serde(default = "default_questions_start_y")]
    pub questions_start_y: f32,
    #[serde(default = "default_question_page_bottom")]
    pub question_page_bottom: f32,
    #[serde(default = "default_top_margin")]
    pub top_margin: f32,
    #[serde(default = "default_hint_offset")]
    pub hint_offset: f32,
    #[serde(default = "default_blank_offset")]
    pub blank_offset: f32,
    #[serde(default = "default_question_item_height")]
    pub question_item_height: f32,
    #[serde(default = "default_answers_start_y")]
    pub answers_start_y: f32,
    #[serde(default = "default_answer_page_bottom")]
    pub answer_page_bottom: f32,
    #[serde(default = "default_answer_item_height")]
    pub answer_item_height: f32,
    #[serde(default)]
    pub font_sizes: FontSizes,
}

fn default_page_width() -> f32 {
    210.0
}
fn default_page_height() -> f32 {
    297.0
}
fn default_left_margin() -> f32 {
    20.0
}
fn default_indent() -> f32 {
    25.0
}
fn default_right_column_x() -> f32 {
    120.0
}
fn default_title_y() -> f32 {
    20.0
}
fn default_meta_y() -> f32 {
    35.0
}
fn default_meta_line_gap() -> f32 {
    10.0
}
fn default_questions_start_y() -> f32 {
    65.0
}
fn default_question_page_bottom() -> f32 {
    250.0
}
fn default_top_margin() -> f32 {
    30.0
}
fn default_hint_offset() -> f32 {
    8.0
}
fn default_blank_offset() -> f32 {
    20.0
}
fn default_question_item_height() -> f32 {
    35.0
}
fn default_answers_start_y() -> f32 {
    40.0
}
fn default_answer_page_bottom() -> f32 {
    260.0
}
fn default_answer_item_height() -> f32 {
    15.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
            page_height: default_page_height(),
            left_margin: default_left_margin(),
            indent: default_indent(),
            right_column_x: default_right_column_x(),
            title_y: default_title_y(),
            meta_y: default_meta_y(),
            meta_line_gap: default_meta_line_gap(),
            questions_start_y: default_questions_start_y(),
            question_page_bottom: default_question_page_bottom(),
            top_margin: default_top_margin(),
            hint_offset: default_hint_offset(),
            blank_offset: default_blank_offset(),
            question_item_height: default_question_item_height(),
            answers_start_y: default_answers_start_y(),
            answer_page_bottom: default_answer_page_bottom(),
            answer_item_height: default_answer_item_height(),
            font_sizes: FontSizes::default(),
        }
    }
}

impl LayoutConfig {
    pub fn center_x(&self) -> f32 {
        self.page_width / 2.0
    }
}

/// Point sizes per font tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub title: f32,
    pub section_title: f32,
    pub prompt: f32,
    pub body: f32,
    pub hint: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 20.0,
            section_title: 18.0,
            prompt: 14.0,
            body: 12.0,
            hint: 10.0,
        }
    }
}

impl FontSizes {
    pub fn size(&self, tier: FontTier) -> f32 {
        match tier {
            FontTier::Title => self.title,
            FontTier::SectionTitle => self.section_title,
            FontTier::Prompt => self.prompt,
            FontTier::Body => self.body,
            FontTier::Hint => self.hint,
        }
    }
}
