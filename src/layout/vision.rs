//! Vision annotation merge.

use crate::model::{ClassifiedSection, VisionBlock, VisionData};

/// Attach vision annotations to the sections whose vertical range contains them.
///
/// A section gains `vision_blocks` and `vision_confidence` (the mean
/// confidence of its matches) only when at least one annotation falls in
/// `[y_start, y_end]`. An annotation on a shared boundary is attached to
/// both sections. Type, layout and priority are never touched.
pub fn enrich_sections(sections: &mut [ClassifiedSection], vision: &VisionData) {
    if vision.is_empty() {
        return;
    }

    for section in sections.iter_mut() {
        let y_start = section.metadata.y_start;
        let y_end = section.metadata.y_end;

        let matching: Vec<VisionBlock> = vision
            .content_blocks
            .iter()
            .filter(|vb| vb.y() >= y_start && vb.y() <= y_end)
            .cloned()
            .collect();

        if matching.is_empty() {
            continue;
        }

        let confidence = matching.iter().map(|vb| vb.confidence).sum::<f64>() / matching.len() as f64;

        log::debug!(
            "{}: {} vision blocks, mean confidence {:.2}",
            section.id,
            matching.len(),
            confidence
        );

        section.metadata.vision_blocks = Some(matching);
        section.metadata.vision_confidence = Some(confidence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutStrategy, SectionMetadata, SectionType};

    fn section(id: &str, y_start: f64, y_end: f64) -> ClassifiedSection {
        ClassifiedSection {
            id: id.to_string(),
            section_type: SectionType::Card,
            layout_strategy: LayoutStrategy::TextCentered,
            background_color: "#FFFBF5".to_string(),
            blocks: vec![],
            priority: 3,
            mobile_optimized: true,
            metadata: SectionMetadata {
                y_start,
                y_end,
                block_count: 0,
                vision_blocks: None,
                vision_confidence: None,
            },
        }
    }

    #[test]
    fn test_matches_inclusive_range() {
        let mut sections = vec![section("section_0", 0.0, 100.0), section("section_1", 150.0, 200.0)];
        let vision = VisionData::new(vec![
            VisionBlock::new(0.0, 0.8),
            VisionBlock::new(100.0, 0.6),
            VisionBlock::new(120.0, 0.99),
            VisionBlock::new(200.0, 0.5),
        ]);

        enrich_sections(&mut sections, &vision);

        let first = &sections[0].metadata;
        assert_eq!(first.vision_blocks.as_ref().map(Vec::len), Some(2));
        assert!((first.vision_confidence.unwrap() - 0.7).abs() < 1e-9);

        let second = &sections[1].metadata;
        assert_eq!(second.vision_blocks.as_ref().map(Vec::len), Some(1));
        assert_eq!(second.vision_confidence, Some(0.5));
    }

    #[test]
    fn test_no_match_leaves_metadata_alone() {
        let mut sections = vec![section("section_0", 0.0, 100.0)];
        let before = sections.clone();

        enrich_sections(&mut sections, &VisionData::new(vec![VisionBlock::new(500.0, 0.9)]));
        assert_eq!(sections, before);

        enrich_sections(&mut sections, &VisionData::default());
        assert_eq!(sections, before);
    }

    #[test]
    fn test_classification_untouched() {
        let mut sections = vec![section("section_0", 0.0, 100.0)];
        enrich_sections(&mut sections, &VisionData::new(vec![VisionBlock::new(50.0, 1.0)]));

        assert_eq!(sections[0].section_type, SectionType::Card);
        assert_eq!(sections[0].layout_strategy, LayoutStrategy::TextCentered);
        assert_eq!(sections[0].priority, 3);
        assert!(sections[0].has_vision_data());
    }
}
