//! Section segmentation by vertical position.

use crate::model::{Block, Section};

use super::{
    is_main_image, ICON_WIDTH, LONG_PARAGRAPH_CHARS, LONG_PARAGRAPH_GAP, MAIN_IMAGE_ICON_GAP,
    MAIN_IMAGE_TEXT_GAP, SECTION_GAP, SUBTITLE_FONT_SIZE, TITLE_FONT_SIZE,
};

/// The rule that caused a section boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// Gap to the section bottom of 30pt or more
    Gap,
    /// Title-sized text followed by body-sized text
    TitleToBody,
    /// A paragraph of 500+ characters followed by a 20pt gap
    LongParagraph,
    /// A main image followed by text after a 20pt gap
    MainImageThenText,
    /// A main image followed by a small image after a 15pt gap
    MainImageThenIcon,
}

impl SplitRule {
    /// Evaluate the split rules in order for an adjacent pair of blocks.
    ///
    /// `gap` is measured from the current section's `y_end`, not from
    /// `prev`'s bottom edge.
    pub fn evaluate(prev: &Block, curr: &Block, gap: f64) -> Option<SplitRule> {
        if gap >= SECTION_GAP {
            return Some(SplitRule::Gap);
        }

        // Title followed by small text. Subtitles stay with their title.
        if prev.is_text()
            && curr.is_text()
            && prev.font_size() >= TITLE_FONT_SIZE
            && curr.font_size() < SUBTITLE_FONT_SIZE
        {
            return Some(SplitRule::TitleToBody);
        }

        if prev.is_text() && prev.content_len() >= LONG_PARAGRAPH_CHARS && gap >= LONG_PARAGRAPH_GAP
        {
            return Some(SplitRule::LongParagraph);
        }

        if is_main_image(prev) && curr.is_text() && gap >= MAIN_IMAGE_TEXT_GAP {
            return Some(SplitRule::MainImageThenText);
        }

        if is_main_image(prev)
            && curr.is_image()
            && curr.width() < ICON_WIDTH
            && gap >= MAIN_IMAGE_ICON_GAP
        {
            return Some(SplitRule::MainImageThenIcon);
        }

        None
    }
}

/// Splits a page's blocks into contiguous vertical sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionSegmenter;

impl SectionSegmenter {
    /// Create a new segmenter.
    pub fn new() -> Self {
        Self
    }

    /// Sort blocks by `y` and group them into sections.
    ///
    /// The sort is stable, so blocks sharing a `y` keep their input order.
    /// Every block ends up in exactly one section.
    pub fn segment(&self, blocks: &[Block]) -> Vec<Section> {
        let mut sorted: Vec<&Block> = blocks.iter().collect();
        sorted.sort_by(|a, b| a.y.total_cmp(&b.y));

        let mut iter = sorted.into_iter();
        let Some(first) = iter.next() else {
            return vec![];
        };

        let mut sections = Vec::new();
        let mut prev = first;
        let mut current = Section::new(first.clone());

        for block in iter {
            let gap = block.y - current.y_end;

            match SplitRule::evaluate(prev, block, gap) {
                Some(rule) => {
                    log::debug!(
                        "Section split at y={} ({:?}, gap {:.1})",
                        block.y,
                        rule,
                        gap
                    );
                    sections.push(std::mem::replace(&mut current, Section::new(block.clone())));
                }
                None => current.push(block.clone()),
            }

            prev = block;
        }

        // Don't forget the last section
        sections.push(current);

        log::debug!(
            "Grouped {} blocks into {} sections",
            blocks.len(),
            sections.len()
        );

        sections
    }
}
