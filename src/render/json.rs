use crate::error::Result;
use crate::layout::{LayoutConfig, PagedDocument};
use crate::render::DocumentRenderer;

/// Dumps the placement commands as pretty JSON for an external typesetter.
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, doc: &PagedDocument, _layout: &LayoutConfig) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Align, FontTier, PlacementCommand};

    #[test]
    fn test_json_contains_commands() {
        let doc = PagedDocument {
            page_count: 1,
            commands: vec![PlacementCommand {
                page_index: 0,
                x: 105.0,
                y: 20.0,
                tier: FontTier::SectionTitle,
                align: Align::Center,
                text: "解答".to_string(),
            }],
        };
        let bytes = JsonRenderer.render(&doc, &LayoutConfig::default()).unwrap();
        let parsed: PagedDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, doc);
        let raw = String::from_utf8(bytes).unwrap();
        assert!(raw.contains("\"section-title\""));
    }
}
