//! Layout optimization: block classification, section segmentation and
//! section styling.
//!
//! The pipeline is a small rule engine with fixed thresholds:
//!
//! 1. [`BlockClassifier`] tallies blocks into semantic buckets.
//! 2. [`SectionSegmenter`] sorts blocks by `y` and splits them into
//!    contiguous sections.
//! 3. [`SectionClassifier`] assigns a [`SectionType`](crate::model::SectionType)
//!    and [`LayoutStrategy`](crate::model::LayoutStrategy) to each section.
//! 4. [`PaletteCursor`] hands out background colours.
//! 5. [`enrich_sections`] merges optional vision annotations.
//!
//! [`LayoutOptimizer`] runs all of it.

use crate::model::Block;

mod classifier;
mod optimizer;
mod options;
mod palette;
mod section;
mod segmenter;
mod vision;

pub use classifier::{BlockClassifier, BlockRole, ClassifiedBlockSet};
pub use optimizer::LayoutOptimizer;
pub use options::{ContentType, ErrorMode, LayoutOptions};
pub use palette::{Palette, PaletteCursor, CARD_BACKGROUND, DEFAULT_BACKGROUND};
pub use section::{SectionClassification, SectionClassifier};
pub use segmenter::{SectionSegmenter, SplitRule};
pub use vision::enrich_sections;

/// Text at or above this size is a title.
pub const TITLE_FONT_SIZE: f64 = 14.0;

/// Text at or above this size (and below a title) is a subtitle.
pub const SUBTITLE_FONT_SIZE: f64 = 11.0;

/// Text at or above this size (and below a subtitle) is body text.
pub const BODY_FONT_SIZE: f64 = 9.0;

/// Images at least this wide are main images.
pub const MAIN_IMAGE_WIDTH: f64 = 300.0;

/// Images at least this wide (and narrower than a main image) are icons.
pub const ICON_WIDTH: f64 = 100.0;

/// Vertical gap that always starts a new section.
pub const SECTION_GAP: f64 = 30.0;

/// Text at least this many characters long counts as a long paragraph.
pub const LONG_PARAGRAPH_CHARS: usize = 500;

/// Gap after a long paragraph that starts a new section.
pub const LONG_PARAGRAPH_GAP: f64 = 20.0;

/// Gap between a main image and following text that starts a new section.
pub const MAIN_IMAGE_TEXT_GAP: f64 = 20.0;

/// Gap between a main image and a following small image that starts a new section.
pub const MAIN_IMAGE_ICON_GAP: f64 = 15.0;

pub(crate) fn is_title(block: &Block) -> bool {
    block.is_text() && block.font_size() >= TITLE_FONT_SIZE
}

pub(crate) fn is_main_image(block: &Block) -> bool {
    block.is_image() && block.width() >= MAIN_IMAGE_WIDTH
}
