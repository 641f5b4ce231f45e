//! Layout result with per-section output and a page summary.

use crate::model::{ClassifiedSection, SectionType};
use serde::{Deserialize, Serialize};

use crate::layout::DEFAULT_BACKGROUND;

/// Result of optimizing one page of blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Sections in emission (top to bottom) order
    pub sections: Vec<ClassifiedSection>,

    /// Page summary
    pub layout_info: LayoutInfo,
}

impl LayoutResult {
    /// Assemble a result, deriving the summary counts from the sections.
    pub fn new(
        sections: Vec<ClassifiedSection>,
        analyzed_blocks: AnalyzedBlocks,
        content_type: impl Into<String>,
        page_width: u32,
    ) -> Self {
        let layout_info = LayoutInfo {
            page_width,
            total_sections: sections.len(),
            content_type: content_type.into(),
            has_hero: sections
                .iter()
                .any(|s| s.section_type == SectionType::Hero),
            color_sections: sections
                .iter()
                .filter(|s| s.background_color != DEFAULT_BACKGROUND)
                .count(),
            analyzed_blocks,
        };

        Self {
            sections,
            layout_info,
        }
    }

    /// Check if no sections were produced.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Find a section by id.
    pub fn section(&self, id: &str) -> Option<&ClassifiedSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Total number of blocks across all sections.
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }
}

/// Summary of a page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInfo {
    /// Target page width, echoed from the options
    pub page_width: u32,

    /// Number of sections
    pub total_sections: usize,

    /// Content type, echoed as given
    pub content_type: String,

    /// Whether any section is a hero
    pub has_hero: bool,

    /// Number of sections with a non-white background
    pub color_sections: usize,

    /// Block role tallies
    pub analyzed_blocks: AnalyzedBlocks,
}

/// Number of blocks found in each role bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedBlocks {
    pub titles: usize,
    pub subtitles: usize,
    pub body_texts: usize,
    pub main_images: usize,
    pub icons: usize,
}

impl AnalyzedBlocks {
    /// Total across all buckets.
    pub fn total(&self) -> usize {
        self.titles + self.subtitles + self.body_texts + self.main_images + self.icons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutStrategy, SectionMetadata};

    fn section(id: &str, section_type: SectionType, background: &str) -> ClassifiedSection {
        ClassifiedSection {
            id: id.to_string(),
            section_type,
            layout_strategy: LayoutStrategy::TextCentered,
            background_color: background.to_string(),
            blocks: vec![],
            priority: section_type.priority(),
            mobile_optimized: true,
            metadata: SectionMetadata {
                y_start: 0.0,
                y_end: 0.0,
                block_count: 0,
                vision_blocks: None,
                vision_confidence: None,
            },
        }
    }

    #[test]
    fn test_summary_counts() {
        let result = LayoutResult::new(
            vec![
                section("section_0", SectionType::Hero, "#E11D48"),
                section("section_1", SectionType::Card, "#FFFBF5"),
                section("section_2", SectionType::List, "#FFFFFF"),
            ],
            AnalyzedBlocks::default(),
            "election",
            375,
        );

        assert_eq!(result.layout_info.total_sections, 3);
        assert!(result.layout_info.has_hero);
        assert_eq!(result.layout_info.color_sections, 2);
        assert_eq!(result.layout_info.content_type, "election");
        assert!(result.section("section_1").is_some());
        assert!(result.section("section_9").is_none());
    }

    #[test]
    fn test_empty_result() {
        let result = LayoutResult::new(vec![], AnalyzedBlocks::default(), "general", 375);
        assert!(result.is_empty());
        assert!(!result.layout_info.has_hero);
        assert_eq!(result.layout_info.color_sections, 0);
        assert_eq!(result.layout_info.analyzed_blocks.total(), 0);
    }
}
