//! Per-block role classification.

use crate::model::{Block, BlockKind};
use crate::render::AnalyzedBlocks;

use super::{BODY_FONT_SIZE, ICON_WIDTH, MAIN_IMAGE_WIDTH, SUBTITLE_FONT_SIZE, TITLE_FONT_SIZE};

/// Semantic role of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockRole {
    Title,
    Subtitle,
    BodyText,
    MainImage,
    Icon,
    Unknown,
}

/// Blocks grouped by role. Every classified block lands in exactly one bucket.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedBlockSet<'a> {
    pub titles: Vec<&'a Block>,
    pub subtitles: Vec<&'a Block>,
    pub body_texts: Vec<&'a Block>,
    pub main_images: Vec<&'a Block>,
    pub icons: Vec<&'a Block>,
    pub unknown: Vec<&'a Block>,
}

impl<'a> ClassifiedBlockSet<'a> {
    /// Bucket for a role.
    pub fn bucket(&self, role: BlockRole) -> &[&'a Block] {
        match role {
            BlockRole::Title => &self.titles,
            BlockRole::Subtitle => &self.subtitles,
            BlockRole::BodyText => &self.body_texts,
            BlockRole::MainImage => &self.main_images,
            BlockRole::Icon => &self.icons,
            BlockRole::Unknown => &self.unknown,
        }
    }

    fn push(&mut self, role: BlockRole, block: &'a Block) {
        let bucket = match role {
            BlockRole::Title => &mut self.titles,
            BlockRole::Subtitle => &mut self.subtitles,
            BlockRole::BodyText => &mut self.body_texts,
            BlockRole::MainImage => &mut self.main_images,
            BlockRole::Icon => &mut self.icons,
            BlockRole::Unknown => &mut self.unknown,
        };
        bucket.push(block);
    }

    /// Total number of classified blocks.
    pub fn len(&self) -> usize {
        self.titles.len()
            + self.subtitles.len()
            + self.body_texts.len()
            + self.main_images.len()
            + self.icons.len()
            + self.unknown.len()
    }

    /// Check if no blocks were classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-bucket counts for the layout summary.
    pub fn counts(&self) -> AnalyzedBlocks {
        AnalyzedBlocks {
            titles: self.titles.len(),
            subtitles: self.subtitles.len(),
            body_texts: self.body_texts.len(),
            main_images: self.main_images.len(),
            icons: self.icons.len(),
        }
    }
}

/// Assigns each block a role from static font-size and width thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockClassifier;

impl BlockClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Role of one block.
    pub fn role(&self, block: &Block) -> BlockRole {
        match block.kind {
            BlockKind::Text => {
                let size = block.font_size();
                if size >= TITLE_FONT_SIZE {
                    BlockRole::Title
                } else if size >= SUBTITLE_FONT_SIZE {
                    BlockRole::Subtitle
                } else if size >= BODY_FONT_SIZE {
                    BlockRole::BodyText
                } else {
                    BlockRole::Unknown
                }
            }
            BlockKind::Image => {
                let width = block.width();
                if width >= MAIN_IMAGE_WIDTH {
                    BlockRole::MainImage
                } else if width >= ICON_WIDTH {
                    BlockRole::Icon
                } else {
                    BlockRole::Unknown
                }
            }
            BlockKind::Other(_) | BlockKind::Unknown => BlockRole::Unknown,
        }
    }

    /// Group blocks by role, keeping input order within each bucket.
    pub fn classify<'a>(&self, blocks: &'a [Block]) -> ClassifiedBlockSet<'a> {
        let mut set = ClassifiedBlockSet::default();
        for block in blocks {
            set.push(self.role(block), block);
        }

        log::debug!(
            "Classified {} blocks: {} titles, {} subtitles, {} body, {} main images, {} icons, {} unknown",
            blocks.len(),
            set.titles.len(),
            set.subtitles.len(),
            set.body_texts.len(),
            set.main_images.len(),
            set.icons.len(),
            set.unknown.len()
        );

        set
    }
}
