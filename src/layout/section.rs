//! Section type and layout selection.

use crate::model::{LayoutStrategy, Section, SectionType};

use super::{is_main_image, is_title};

/// Type and layout chosen for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionClassification {
    pub section_type: SectionType,
    pub layout_strategy: LayoutStrategy,
}

impl SectionClassification {
    fn new(section_type: SectionType, layout_strategy: LayoutStrategy) -> Self {
        Self {
            section_type,
            layout_strategy,
        }
    }
}

/// Decides what kind of section a group of blocks forms.
///
/// Title and main-image detection look at every block in the section,
/// not only its first or last block.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionClassifier;

impl SectionClassifier {
    /// Create a new section classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify one section. The first matching branch wins.
    pub fn classify(&self, section: &Section) -> SectionClassification {
        let has_title = section.blocks.iter().any(is_title);
        let has_main_image = section.blocks.iter().any(is_main_image);

        match (has_title, has_main_image) {
            (true, true) => {
                SectionClassification::new(SectionType::Hero, LayoutStrategy::ImageTopTextBottom)
            }
            (true, false) => {
                SectionClassification::new(SectionType::Title, LayoutStrategy::TextCentered)
            }
            (false, true) => {
                SectionClassification::new(SectionType::Image, LayoutStrategy::ImageFullWidth)
            }
            (false, false) if section.len() >= 3 && section.blocks.iter().all(|b| b.is_text()) => {
                SectionClassification::new(SectionType::List, LayoutStrategy::ListVertical)
            }
            (false, false) => {
                SectionClassification::new(SectionType::Card, LayoutStrategy::TextCentered)
            }
        }
    }
}
