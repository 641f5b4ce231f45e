//! Data model for layout optimization.
//!
//! Blocks come in from an upstream PDF/OCR extraction layer, sections go
//! out to an HTML templating layer. Both ends speak JSON, so every type
//! here round-trips through serde and keeps unknown upstream fields.

mod block;
mod section;
mod vision;

pub use block::{Block, BlockKind, DEFAULT_FONT_SIZE};
pub use section::{
    priority_for, ClassifiedSection, LayoutStrategy, Section, SectionMetadata, SectionType,
};
pub use vision::{VisionBlock, VisionData, VisionPosition};
