//! Section-level types.

use super::{Block, VisionBlock};
use serde::{Deserialize, Serialize};

/// A contiguous run of vertically adjacent blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Blocks in vertical order
    pub blocks: Vec<Block>,
    /// Top of the first block
    pub y_start: f64,
    /// Lowest bottom edge seen so far
    pub y_end: f64,
}

impl Section {
    /// Start a section seeded by one block.
    pub fn new(block: Block) -> Self {
        Self {
            y_start: block.y,
            y_end: block.bottom(),
            blocks: vec![block],
        }
    }

    /// Append a block, extending `y_end` if it reaches further down.
    pub fn push(&mut self, block: Block) {
        self.y_end = self.y_end.max(block.bottom());
        self.blocks.push(block);
    }

    /// Number of blocks in the section.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Sections are never empty once created.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Check if a vertical position lies in `[y_start, y_end]`.
    pub fn spans(&self, y: f64) -> bool {
        y >= self.y_start && y <= self.y_end
    }
}

/// Semantic type of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    /// Large title together with a main image
    Hero,
    /// Title without a main image
    Title,
    /// Plain body content
    Content,
    /// Main image without a title
    Image,
    /// Three or more text blocks
    List,
    /// Anything else
    Card,
    /// Page footer
    Footer,
}

impl SectionType {
    /// Display priority (1 = most prominent).
    pub fn priority(self) -> u8 {
        match self {
            SectionType::Hero => 1,
            SectionType::Title => 2,
            SectionType::Card => 3,
            SectionType::Image => 4,
            SectionType::List => 5,
            SectionType::Content => 6,
            SectionType::Footer => 7,
        }
    }

    /// Wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Title => "title",
            SectionType::Content => "content",
            SectionType::Image => "image",
            SectionType::List => "list",
            SectionType::Card => "card",
            SectionType::Footer => "footer",
        }
    }

    /// Parse a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hero" => Some(SectionType::Hero),
            "title" => Some(SectionType::Title),
            "content" => Some(SectionType::Content),
            "image" => Some(SectionType::Image),
            "list" => Some(SectionType::List),
            "card" => Some(SectionType::Card),
            "footer" => Some(SectionType::Footer),
            _ => None,
        }
    }

    /// Whether sections of this type take a colour from the palette.
    pub fn is_colored(self) -> bool {
        matches!(self, SectionType::Hero | SectionType::Title)
    }
}

/// Priority for a section type given by name. Unrecognised names rank 5.
pub fn priority_for(name: &str) -> u8 {
    SectionType::from_name(name).map_or(5, SectionType::priority)
}

/// Visual arrangement used when rendering a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    ImageTopTextBottom,
    TextTopImageBottom,
    TextLeftImageRight,
    ImageLeftTextRight,
    TextCentered,
    ImageFullWidth,
    CardGrid,
    ListVertical,
}

impl LayoutStrategy {
    /// Wire name of the strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutStrategy::ImageTopTextBottom => "image-top-text-bottom",
            LayoutStrategy::TextTopImageBottom => "text-top-image-bottom",
            LayoutStrategy::TextLeftImageRight => "text-left-image-right",
            LayoutStrategy::ImageLeftTextRight => "image-left-text-right",
            LayoutStrategy::TextCentered => "text-centered",
            LayoutStrategy::ImageFullWidth => "image-full-width",
            LayoutStrategy::CardGrid => "card-grid",
            LayoutStrategy::ListVertical => "list-vertical",
        }
    }
}

/// Flat metadata attached to each classified section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMetadata {
    pub y_start: f64,
    pub y_end: f64,
    pub block_count: usize,

    /// Vision annotations falling inside the section's vertical range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_blocks: Option<Vec<VisionBlock>>,

    /// Mean confidence of `vision_blocks`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_confidence: Option<f64>,
}

impl SectionMetadata {
    /// Metadata describing a segmented section.
    pub fn for_section(section: &Section) -> Self {
        Self {
            y_start: section.y_start,
            y_end: section.y_end,
            block_count: section.len(),
            vision_blocks: None,
            vision_confidence: None,
        }
    }
}

/// A section with its type, layout, colour and priority assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSection {
    /// `section_{index}` in emission order
    pub id: String,

    #[serde(rename = "type")]
    pub section_type: SectionType,

    pub layout_strategy: LayoutStrategy,

    /// Hex background colour
    #[serde(rename = "background")]
    pub background_color: String,

    /// The section's original blocks
    pub blocks: Vec<Block>,

    pub priority: u8,

    /// Always true for sections produced by the optimizer
    pub mobile_optimized: bool,

    pub metadata: SectionMetadata,
}

impl ClassifiedSection {
    /// Whether a vision enrichment matched this section.
    pub fn has_vision_data(&self) -> bool {
        self.metadata.vision_blocks.is_some()
    }
}
