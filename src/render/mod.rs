//! Output records and their serialization.

mod json;
mod result;

pub use json::{to_json, JsonFormat};
pub use result::{AnalyzedBlocks, LayoutInfo, LayoutResult};
