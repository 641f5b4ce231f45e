//! Layout optimization options and configuration.

use std::fmt;

use crate::model::VisionData;

/// Default mobile viewport width in CSS pixels.
pub const DEFAULT_PAGE_WIDTH: u32 = 375;

/// Document category, used to pick a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    /// Election flyers
    Election,
    /// Newsletters and bulletins
    Newsletter,
    /// Anything else, kept as given so it can be echoed back
    Other(String),
}

impl ContentType {
    /// Name as supplied by the caller.
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Election => "election",
            ContentType::Newsletter => "newsletter",
            ContentType::Other(name) => name,
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Other("general".to_string())
    }
}

impl From<&str> for ContentType {
    fn from(name: &str) -> Self {
        match name {
            "election" => ContentType::Election,
            "newsletter" => ContentType::Newsletter,
            other => ContentType::Other(other.to_string()),
        }
    }
}

impl From<String> for ContentType {
    fn from(name: String) -> Self {
        ContentType::from(name.as_str())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How malformed blocks in a request are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Reject blocks with no `type` or negative geometry
    Strict,
    /// Accept them, clamping negative geometry to zero
    #[default]
    Lenient,
}

/// Options for a layout optimization run.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Document category
    pub content_type: ContentType,

    /// Target page width, echoed into the layout summary
    pub page_width: u32,

    /// Optional vision annotations to merge into the sections
    pub vision_data: Option<VisionData>,

    /// Request validation mode
    pub error_mode: ErrorMode,

    /// Whether to optimize multiple pages in parallel
    pub parallel: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<ContentType>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the page width.
    pub fn with_page_width(mut self, width: u32) -> Self {
        self.page_width = width;
        self
    }

    /// Attach vision annotations.
    pub fn with_vision_data(mut self, vision: VisionData) -> Self {
        self.vision_data = Some(vision);
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable strict mode (reject malformed blocks).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            content_type: ContentType::default(),
            page_width: DEFAULT_PAGE_WIDTH,
            vision_data: None,
            error_mode: ErrorMode::Lenient,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LayoutOptions::default();
        assert_eq!(options.content_type.as_str(), "general");
        assert_eq!(options.page_width, 375);
        assert!(options.vision_data.is_none());
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.parallel);
    }

    #[test]
    fn test_builder() {
        let options = LayoutOptions::new()
            .with_content_type("election")
            .with_page_width(414)
            .strict()
            .sequential();

        assert_eq!(options.content_type, ContentType::Election);
        assert_eq!(options.page_width, 414);
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(!options.parallel);
    }

    #[test]
    fn test_content_type_parse() {
        assert_eq!(ContentType::from("newsletter"), ContentType::Newsletter);
        assert_eq!(
            ContentType::from("Election"),
            ContentType::Other("Election".to_string())
        );
        assert_eq!(ContentType::from("church").to_string(), "church");
    }
}
