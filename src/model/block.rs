//! Input blocks produced by the upstream PDF/OCR extraction layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Font size assumed for text blocks that carry none.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Kind of a raw block.
///
/// Deserialized from the block's `type` field. Anything other than
/// `"text"` or `"image"` is kept verbatim in [`BlockKind::Other`] so it
/// can be echoed back. A block whose `type` is absent, `null` or not a
/// string is [`BlockKind::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum BlockKind {
    /// A run of text
    Text,
    /// A raster or vector image
    Image,
    /// A kind this crate does not interpret (e.g. `"table"`)
    Other(String),
    /// No kind supplied
    #[default]
    Unknown,
}

impl BlockKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Other(name) => name,
            BlockKind::Unknown => "unknown",
        }
    }

    /// Whether the block had no usable `type` field.
    pub fn is_missing(&self) -> bool {
        matches!(self, BlockKind::Unknown)
    }
}

impl From<String> for BlockKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "text" => BlockKind::Text,
            "image" => BlockKind::Image,
            _ => BlockKind::Other(name),
        }
    }
}

impl From<Value> for BlockKind {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => BlockKind::from(name),
            _ => BlockKind::Unknown,
        }
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

/// A positioned text or image element on a page.
///
/// Coordinates are in points, with `y` growing downwards. Optional fields
/// keep their absence so the block can be echoed back unchanged; use the
/// accessor methods to read them with their documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block kind (`type` on the wire)
    #[serde(rename = "type", default, skip_serializing_if = "BlockKind::is_missing")]
    pub kind: BlockKind,

    /// Top edge
    #[serde(default)]
    pub y: f64,

    /// Vertical extent
    #[serde(default)]
    pub height: f64,

    /// Font size of a text block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Text content of a text block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Width of an image block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Any other fields supplied upstream, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Block {
    fn new(kind: BlockKind, y: f64, height: f64) -> Self {
        Self {
            kind,
            y,
            height,
            font_size: None,
            content: None,
            width: None,
            extra: Map::new(),
        }
    }

    /// Create a text block.
    pub fn text(y: f64, height: f64, font_size: f64, content: impl Into<String>) -> Self {
        Self {
            font_size: Some(font_size),
            content: Some(content.into()),
            ..Self::new(BlockKind::Text, y, height)
        }
    }

    /// Create an image block.
    pub fn image(y: f64, height: f64, width: f64) -> Self {
        Self {
            width: Some(width),
            ..Self::new(BlockKind::Image, y, height)
        }
    }

    /// Create a block with no recognised kind.
    pub fn unknown(y: f64, height: f64) -> Self {
        Self::new(BlockKind::Unknown, y, height)
    }

    /// Set the kind.
    pub fn with_kind(mut self, kind: BlockKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attach an extra pass-through field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Font size, defaulting to 10pt.
    pub fn font_size(&self) -> f64 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    /// Width, defaulting to 0.
    pub fn width(&self) -> f64 {
        self.width.unwrap_or(0.0)
    }

    /// Text content, empty if absent.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Number of characters in the content.
    pub fn content_len(&self) -> usize {
        self.content().chars().count()
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this is a text block.
    pub fn is_text(&self) -> bool {
        self.kind == BlockKind::Text
    }

    /// Check if this is an image block.
    pub fn is_image(&self) -> bool {
        self.kind == BlockKind::Image
    }
}
