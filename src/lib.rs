//! # studysnap-layout
//!
//! Mobile layout optimizer for documents extracted from PDFs.
//!
//! Takes the positioned text and image blocks produced by a PDF/OCR
//! extraction pass and groups them into styled sections ready for
//! single-column mobile HTML.
//!
//! ## Quick Start
//!
//! ```
//! use studysnap_layout::{optimize, Block, LayoutOptions, SectionType};
//!
//! let blocks = vec![
//!     Block::text(0.0, 20.0, 16.0, "Town Hall Election"),
//!     Block::image(25.0, 200.0, 350.0),
//! ];
//!
//! let options = LayoutOptions::new().with_content_type("election");
//! let result = optimize(&blocks, &options);
//!
//! assert_eq!(result.sections[0].section_type, SectionType::Hero);
//! assert_eq!(result.sections[0].background_color, "#E11D48");
//! ```
//!
//! ## Pipeline
//!
//! - **Block classification**: titles, subtitles, body text, main images, icons
//! - **Section segmentation**: vertical gaps and content transitions split sections
//! - **Section classification**: hero, title, image, list or card, with a layout strategy
//! - **Styling**: palette colours, display priority, optional vision annotations

pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod request;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{
    BlockClassifier, ClassifiedBlockSet, ContentType, ErrorMode, LayoutOptimizer, LayoutOptions,
    Palette, SectionClassifier, SectionSegmenter, SplitRule,
};
pub use model::{
    Block, BlockKind, ClassifiedSection, LayoutStrategy, Section, SectionMetadata, SectionType,
    VisionBlock, VisionData,
};
pub use render::{to_json, AnalyzedBlocks, JsonFormat, LayoutInfo, LayoutResult};
pub use request::LayoutRequest;

use std::io::Read;
use std::path::Path;

/// Optimize one page of blocks.
///
/// # Example
///
/// ```
/// use studysnap_layout::{optimize, LayoutOptions};
///
/// let result = optimize(&[], &LayoutOptions::default());
/// assert_eq!(result.layout_info.total_sections, 0);
/// ```
pub fn optimize(blocks: &[Block], options: &LayoutOptions) -> LayoutResult {
    LayoutOptimizer::new().optimize(blocks, options)
}

/// Validate a request and optimize it.
///
/// Request-level content type, page width and vision data take precedence
/// over `options`.
pub fn optimize_request(mut request: LayoutRequest, options: &LayoutOptions) -> Result<LayoutResult> {
    request.validate(options.error_mode)?;
    let options = request.resolve_options(options);
    Ok(LayoutOptimizer::new().optimize(&request.blocks, &options))
}

/// Optimize a request given as a JSON string.
///
/// # Example
///
/// ```
/// use studysnap_layout::{optimize_json, LayoutOptions};
///
/// let json = r#"{"blocks": [{"type": "text", "y": 0, "height": 20, "font_size": 16}],
///               "content_type": "newsletter"}"#;
/// let result = optimize_json(json, &LayoutOptions::default())?;
/// assert_eq!(result.sections[0].background_color, "#4CAF50");
/// # Ok::<(), studysnap_layout::Error>(())
/// ```
pub fn optimize_json(json: &str, options: &LayoutOptions) -> Result<LayoutResult> {
    optimize_request(LayoutRequest::from_json(json)?, options)
}

/// Optimize a request read from a reader.
pub fn optimize_reader<R: Read>(reader: R, options: &LayoutOptions) -> Result<LayoutResult> {
    optimize_request(LayoutRequest::from_reader(reader)?, options)
}

/// Optimize a request stored in a JSON file.
///
/// # Example
///
/// ```no_run
/// use studysnap_layout::{optimize_file, to_json, JsonFormat, LayoutOptions};
///
/// let result = optimize_file("page1.blocks.json", &LayoutOptions::default())?;
/// std::fs::write("page1.layout.json", to_json(&result, JsonFormat::Pretty)?)?;
/// # Ok::<(), studysnap_layout::Error>(())
/// ```
pub fn optimize_file<P: AsRef<Path>>(path: P, options: &LayoutOptions) -> Result<LayoutResult> {
    optimize_request(LayoutRequest::from_file(path)?, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_json_bare_array() {
        let json = r#"[
            {"type": "image", "y": 0, "height": 250, "width": 320},
            {"type": "text", "y": 280, "height": 30, "font_size": 10}
        ]"#;
        let result = optimize_json(json, &LayoutOptions::default()).unwrap();
        assert_eq!(result.layout_info.total_sections, 2);
        assert_eq!(result.layout_info.content_type, "general");
        assert_eq!(result.layout_info.page_width, 375);
    }

    #[test]
    fn test_optimize_json_request_overrides_options() {
        let json = r#"{"blocks": [], "content_type": "church", "page_width": 414}"#;
        let options = LayoutOptions::new().with_content_type("election");
        let result = optimize_json(json, &options).unwrap();
        assert_eq!(result.layout_info.content_type, "church");
        assert_eq!(result.layout_info.page_width, 414);
    }

    #[test]
    fn test_optimize_json_strict_rejects() {
        let json = r#"[{"y": 0, "height": 10}]"#;
        let options = LayoutOptions::new().strict();
        assert!(matches!(
            optimize_json(json, &options),
            Err(Error::InvalidBlock { index: 0, .. })
        ));

        // Lenient mode keeps the block as unknown
        let result = optimize_json(json, &LayoutOptions::default()).unwrap();
        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.sections[0].section_type, SectionType::Card);
    }

    #[test]
    fn test_optimize_json_invalid() {
        assert!(matches!(
            optimize_json("not json", &LayoutOptions::default()),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_optimize_reader() {
        let json = br#"[{"type": "text", "y": 0, "height": 20, "font_size": 16}]"#;
        let result = optimize_reader(&json[..], &LayoutOptions::default()).unwrap();
        assert_eq!(result.sections[0].section_type, SectionType::Title);
    }
}
