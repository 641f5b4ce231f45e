//! Layout request ingestion.
//!
//! Upstream extractors hand over either a bare JSON array of blocks or a
//! request object carrying the blocks together with the content type,
//! page width and vision annotations.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::layout::{ContentType, ErrorMode, LayoutOptions};
use crate::model::{Block, VisionData};

/// Top-level shape of a request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// `[ {block}, ... ]`
    BlockList,
    /// `{ "blocks": [...], ... }`
    Envelope,
}

/// Detect the shape of a parsed request document.
pub fn detect_shape(value: &Value) -> Option<RequestShape> {
    match value {
        Value::Array(_) => Some(RequestShape::BlockList),
        Value::Object(map) if map.contains_key("blocks") => Some(RequestShape::Envelope),
        _ => None,
    }
}

#[derive(Deserialize)]
struct Envelope {
    blocks: Vec<Block>,
    #[serde(default)]
    content_type: Option<String>,
    #[serde(default)]
    page_width: Option<u32>,
    #[serde(default)]
    vision_data: Option<VisionData>,
}

/// A page of blocks plus optional per-request settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutRequest {
    /// Blocks to lay out
    pub blocks: Vec<Block>,

    /// Content type overriding the caller's options
    pub content_type: Option<String>,

    /// Page width overriding the caller's options
    pub page_width: Option<u32>,

    /// Vision annotations overriding the caller's options
    pub vision_data: Option<VisionData>,
}

impl LayoutRequest {
    /// Create a request with only blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Self::default()
        }
    }

    /// Parse a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a request from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Read a request from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build a request from an already-parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self> {
        match detect_shape(&value) {
            Some(RequestShape::BlockList) => Ok(Self::new(serde_json::from_value(value)?)),
            Some(RequestShape::Envelope) => {
                let envelope: Envelope = serde_json::from_value(value)?;
                Ok(Self {
                    blocks: envelope.blocks,
                    content_type: envelope.content_type,
                    page_width: envelope.page_width,
                    vision_data: envelope.vision_data,
                })
            }
            None => Err(Error::UnsupportedShape),
        }
    }

    /// Check blocks for missing kinds and bad geometry.
    ///
    /// In strict mode the first offending block is reported as
    /// [`Error::InvalidBlock`]. In lenient mode blocks without a kind are
    /// kept as unknown and negative or non-finite numbers are reset to 0.
    pub fn validate(&mut self, mode: ErrorMode) -> Result<()> {
        for (index, block) in self.blocks.iter_mut().enumerate() {
            if block.kind.is_missing() {
                if mode == ErrorMode::Strict {
                    return Err(Error::InvalidBlock {
                        index,
                        reason: "missing or non-string type".to_string(),
                    });
                }
                log::debug!("Block {} has no usable type, treating as unknown", index);
            }

            for (field, value) in [
                ("y", Some(&mut block.y)),
                ("height", Some(&mut block.height)),
                ("font_size", block.font_size.as_mut()),
                ("width", block.width.as_mut()),
            ] {
                let Some(value) = value else { continue };
                if value.is_finite() && *value >= 0.0 {
                    continue;
                }
                if mode == ErrorMode::Strict {
                    return Err(Error::InvalidBlock {
                        index,
                        reason: format!("{} must be a non-negative number, got {}", field, value),
                    });
                }
                log::warn!("Block {}: {} is {}, using 0", index, field, value);
                *value = 0.0;
            }
        }
        Ok(())
    }

    /// Merge request-level settings over `base`.
    pub fn resolve_options(&self, base: &LayoutOptions) -> LayoutOptions {
        let mut options = base.clone();
        if let Some(ref content_type) = self.content_type {
            options.content_type = ContentType::from(content_type.as_str());
        }
        if let Some(width) = self.page_width {
            options.page_width = width;
        }
        if let Some(ref vision) = self.vision_data {
            options.vision_data = Some(vision.clone());
        }
        options
    }
}
