//! Mobile layout optimizer.

use rayon::prelude::*;

use crate::model::{Block, ClassifiedSection, Section, SectionMetadata};
use crate::render::LayoutResult;

use super::{
    enrich_sections, BlockClassifier, ClassifiedBlockSet, LayoutOptions, Palette,
    SectionClassifier, SectionSegmenter,
};

/// Turns a page of positioned blocks into styled, mobile-ready sections.
///
/// The optimizer holds no mutable state: thresholds are constants and the
/// palette cursor lives only for the duration of one [`optimize`] call,
/// so a single instance can be shared freely across threads.
///
/// [`optimize`]: LayoutOptimizer::optimize
#[derive(Debug, Clone, Default)]
pub struct LayoutOptimizer {
    classifier: BlockClassifier,
    segmenter: SectionSegmenter,
    section_classifier: SectionClassifier,
}

impl LayoutOptimizer {
    /// Create a new optimizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally blocks into role buckets.
    pub fn analyze_blocks<'a>(&self, blocks: &'a [Block]) -> ClassifiedBlockSet<'a> {
        self.classifier.classify(blocks)
    }

    /// Group blocks into vertical sections.
    pub fn group_into_sections(&self, blocks: &[Block]) -> Vec<Section> {
        self.segmenter.segment(blocks)
    }

    /// Classify sections and assign ids, colours and priorities.
    pub fn classify_sections(
        &self,
        sections: Vec<Section>,
        palette: Palette,
    ) -> Vec<ClassifiedSection> {
        let mut cursor = palette.cursor();

        sections
            .into_iter()
            .enumerate()
            .map(|(idx, section)| {
                let classification = self.section_classifier.classify(&section);
                let background = cursor.background(classification.section_type);
                let metadata = SectionMetadata::for_section(&section);

                ClassifiedSection {
                    id: format!("section_{}", idx),
                    section_type: classification.section_type,
                    layout_strategy: classification.layout_strategy,
                    background_color: background.to_string(),
                    blocks: section.blocks,
                    priority: classification.section_type.priority(),
                    mobile_optimized: true,
                    metadata,
                }
            })
            .collect()
    }

    /// Run the full pipeline over one page of blocks.
    pub fn optimize(&self, blocks: &[Block], options: &LayoutOptions) -> LayoutResult {
        log::info!(
            "Optimizing layout: {}, {} blocks",
            options.content_type,
            blocks.len()
        );

        let analyzed = self.analyze_blocks(blocks).counts();
        let sections = self.group_into_sections(blocks);
        let palette = Palette::for_content_type(&options.content_type);

        let mut classified = self.classify_sections(sections, palette);

        if let Some(ref vision) = options.vision_data {
            enrich_sections(&mut classified, vision);
        }

        let result = LayoutResult::new(
            classified,
            analyzed,
            options.content_type.as_str(),
            options.page_width,
        );

        log::info!(
            "Layout optimized: {} sections",
            result.layout_info.total_sections
        );

        result
    }

    /// Optimize several pages independently.
    ///
    /// Each page gets its own palette cursor, so colours restart on every
    /// page. Any vision data in `options` is applied to every page; callers
    /// with per-page annotations should call [`optimize`] per page instead.
    /// Results are in input order whether or not `options.parallel` is set.
    ///
    /// [`optimize`]: LayoutOptimizer::optimize
    pub fn optimize_pages(&self, pages: &[Vec<Block>], options: &LayoutOptions) -> Vec<LayoutResult> {
        if options.parallel && pages.len() > 1 {
            pages
                .par_iter()
                .map(|blocks| self.optimize(blocks, options))
                .collect()
        } else {
            pages
                .iter()
                .map(|blocks| self.optimize(blocks, options))
                .collect()
        }
    }
}
