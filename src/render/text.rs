use crate::error::Result;
use crate::layout::{Align, LayoutConfig, PagedDocument, PlacementCommand};
use crate::render::DocumentRenderer;

const PAGE_SEPARATOR: &str = "\x0c\n";

/// Plain-text backend: each page becomes a `columns` x `rows` character
/// grid, pages separated by a form feed. Every char counts as one column.
pub struct TextRenderer {
    columns: usize,
    rows: usize,
}

impl TextRenderer {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    fn render_page<'a>(
        &self,
        commands: impl Iterator<Item = &'a PlacementCommand>,
        layout: &LayoutConfig,
    ) -> String {
        let mut grid = vec![vec![' '; self.columns]; self.rows];

        for cmd in commands {
            let row = scale(cmd.y, layout.page_height, self.rows);
            let text: Vec<char> = cmd.text.chars().collect();
            let anchor = scale(cmd.x, layout.page_width, self.columns);
            let start = match cmd.align {
                Align::Left => anchor,
                Align::Center => anchor.saturating_sub(text.len() / 2),
            };
            let line = &mut grid[row];
            for (cell, ch) in line.iter_mut().skip(start).zip(text) {
                *cell = ch;
            }
        }

        let mut lines: Vec<String> = grid
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let mut page = lines.join("\n");
        page.push('\n');
        page
    }
}

/// Map a page coordinate onto a grid cell index, clamped to the grid.
fn scale(value: f32, extent: f32, cells: usize) -> usize {
    if extent <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cell = (value / extent * cells as f32).round() as usize;
    cell.min(cells - 1)
}

impl DocumentRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, doc: &PagedDocument, layout: &LayoutConfig) -> Result<Vec<u8>> {
        let pages: Vec<String> = (0..doc.page_count)
            .map(|i| self.render_page(doc.page(i), layout))
            .collect();
        Ok(pages.join(PAGE_SEPARATOR).into_bytes())
    }
}
