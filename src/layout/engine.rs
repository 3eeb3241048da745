use crate::generator::TestItem;
use crate::layout::labels::DocumentLabels;
use crate::layout::{Align, FontTier, LayoutConfig, PagedDocument, PlacementCommand, TestHeader};

/// Position of the next block within one section.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LayoutCursor {
    page_index: usize,
    y: f32,
}

impl LayoutCursor {
    fn new(y: f32) -> Self {
        Self { page_index: 0, y }
    }

    /// Move to the next page when the cursor sits below `bottom`. Checked
    /// before a block is placed, so a block is never split.
    fn break_if_past(&mut self, bottom: f32, top_margin: f32) {
        if self.y > bottom {
            self.page_index += 1;
            self.y = top_margin;
        }
    }
}

/// Greedy first-fit pagination of a test into placement commands.
///
/// The question section and the answer section each start on their own
/// page with a fresh cursor. Blocks are placed in order and never moved
/// once placed.
pub struct PageLayoutEngine<'a> {
    config: &'a LayoutConfig,
    labels: &'a DocumentLabels,
}

impl<'a> PageLayoutEngine<'a> {
    pub fn new(config: &'a LayoutConfig, labels: &'a DocumentLabels) -> Self {
        Self { config, labels }
    }

    pub fn layout_questions(&self, items: &[TestItem], header: &TestHeader) -> Vec<PlacementCommand> {
        let cfg = self.config;
        let labels = self.labels;
        let count = items.len();
        let mut out = Vec::with_capacity(6 + items.len() * 3);

        let mut place = |page_index: usize, x: f32, y: f32, tier: FontTier, align: Align, text: String| {
            out.push(PlacementCommand {
                page_index,
                x,
                y,
                tier,
                align,
                text,
            });
        };

        place(0, cfg.center_x(), cfg.title_y, FontTier::Title, Align::Center, labels.title.clone());

        let meta_y2 = cfg.meta_y + cfg.meta_line_gap;
        let fill = |template: &str| labels.fill(template, header.date, count);
        place(0, cfg.left_margin, cfg.meta_y, FontTier::Body, Align::Left, fill(&labels.date_line));
        place(0, cfg.left_margin, meta_y2, FontTier::Body, Align::Left, fill(&labels.count_line));
        place(0, cfg.right_column_x, cfg.meta_y, FontTier::Body, Align::Left, fill(&labels.name_field));
        place(0, cfg.right_column_x, meta_y2, FontTier::Body, Align::Left, fill(&labels.score_field));

        let mut cursor = LayoutCursor::new(cfg.questions_start_y);
        for item in items {
            cursor.break_if_past(cfg.question_page_bottom, cfg.top_margin);
            let page = cursor.page_index;
            let y = cursor.y;

            place(
                page,
                cfg.left_margin,
                y,
                FontTier::Prompt,
                Align::Left,
                format!("{}. {}", item.ordinal, item.prompt()),
            );
            place(
                page,
                cfg.indent,
                y + cfg.hint_offset,
                FontTier::Hint,
                Align::Left,
                labels.hint(item.direction).to_string(),
            );
            place(
                page,
                cfg.indent,
                y + cfg.blank_offset,
                FontTier::Body,
                Align::Left,
                labels.answer_blank.clone(),
            );

            cursor.y += cfg.question_item_height;
        }

        out
    }

    pub fn layout_answers(&self, items: &[TestItem]) -> Vec<PlacementCommand> {
        let cfg = self.config;
        let mut out = Vec::with_capacity(1 + items.len());

        out.push(PlacementCommand {
            page_index: 0,
            x: cfg.center_x(),
            y: cfg.title_y,
            tier: FontTier::SectionTitle,
            align: Align::Center,
            text: self.labels.answer_key_title.clone(),
        });

        let mut cursor = LayoutCursor::new(cfg.answers_start_y);
        for item in items {
            cursor.break_if_past(cfg.answer_page_bottom, cfg.top_margin);
            out.push(PlacementCommand {
                page_index: cursor.page_index,
                x: cfg.left_margin,
                y: cursor.y,
                tier: FontTier::Body,
                align: Align::Left,
                text: format!("{}. {}", item.ordinal, item.answer()),
            });
            cursor.y += cfg.answer_item_height;
        }

        out
    }

    /// Both sections in one document, answer pages following question pages.
    pub fn layout_document(&self, items: &[TestItem], header: &TestHeader) -> PagedDocument {
        let questions = self.layout_questions(items, header);
        let question_pages = section_page_count(&questions);

        let mut commands = questions;
        commands.extend(self.layout_answers(items).into_iter().map(|mut c| {
            c.page_index += question_pages;
            c
        }));

        let page_count = section_page_count(&commands);
        PagedDocument {
            page_count,
            commands,
        }
    }
}

fn section_page_count(commands: &[PlacementCommand]) -> usize {
    commands.iter().map(|c| c.page_index + 1).max().unwrap_or(1)
}
