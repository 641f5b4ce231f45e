//! Annotations supplied by an external vision-analysis pass.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of a vision-analysis pass over a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisionData {
    /// Detected content blocks
    #[serde(default)]
    pub content_blocks: Vec<VisionBlock>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VisionData {
    /// Wrap a list of annotated blocks.
    pub fn new(content_blocks: Vec<VisionBlock>) -> Self {
        Self {
            content_blocks,
            extra: Map::new(),
        }
    }

    /// Check if there are no annotated blocks.
    pub fn is_empty(&self) -> bool {
        self.content_blocks.is_empty()
    }
}

/// Position of an annotated block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisionPosition {
    #[serde(default)]
    pub y: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One block detected by the vision pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisionBlock {
    #[serde(default)]
    pub position: VisionPosition,

    /// Detection confidence in `[0, 1]`
    #[serde(default)]
    pub confidence: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VisionBlock {
    /// Create an annotation at a vertical position.
    pub fn new(y: f64, confidence: f64) -> Self {
        Self {
            position: VisionPosition {
                y,
                extra: Map::new(),
            },
            confidence,
            extra: Map::new(),
        }
    }

    /// Vertical position of the annotation.
    pub fn y(&self) -> f64 {
        self.position.y
    }
}
