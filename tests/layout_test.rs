//! Integration tests for the layout pipeline on concrete pages.

use studysnap_layout::layout::{CARD_BACKGROUND, DEFAULT_BACKGROUND};
use studysnap_layout::{
    optimize, Block, BlockClassifier, LayoutOptimizer, LayoutOptions, LayoutStrategy, SectionType,
};

fn election() -> LayoutOptions {
    LayoutOptions::new().with_content_type("election")
}

#[test]
fn test_single_title_block() {
    let blocks = vec![Block::text(0.0, 20.0, 16.0, "Title")];

    let set = BlockClassifier::new().classify(&blocks);
    assert_eq!(set.titles.len(), 1);

    let optimizer = LayoutOptimizer::new();
    let sections = optimizer.group_into_sections(&blocks);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].y_start, 0.0);
    assert_eq!(sections[0].y_end, 20.0);

    let result = optimizer.optimize(&blocks, &LayoutOptions::default());
    assert_eq!(result.sections[0].section_type, SectionType::Title);
    assert_eq!(result.sections[0].layout_strategy, LayoutStrategy::TextCentered);
}

#[test]
fn test_title_with_main_image_is_hero() {
    let blocks = vec![
        Block::text(0.0, 20.0, 16.0, "Candidate"),
        Block::image(25.0, 200.0, 350.0),
    ];
    let result = optimize(&blocks, &LayoutOptions::default());

    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].section_type, SectionType::Hero);
    assert_eq!(
        result.sections[0].layout_strategy,
        LayoutStrategy::ImageTopTextBottom
    );
    assert_eq!(result.sections[0].priority, 1);
    assert!(result.layout_info.has_hero);
}

#[test]
fn test_gap_of_thirty_splits() {
    let blocks = vec![
        Block::image(0.0, 250.0, 320.0),
        Block::text(280.0, 30.0, 10.0, "Body"),
    ];
    let result = optimize(&blocks, &LayoutOptions::default());

    assert_eq!(result.sections.len(), 2);
    assert_eq!(result.sections[0].section_type, SectionType::Image);
    assert_eq!(result.sections[1].section_type, SectionType::Card);
}

#[test]
fn test_three_text_blocks_form_list() {
    let blocks = vec![
        Block::text(0.0, 20.0, 10.0, "Sunday service 11:00"),
        Block::text(40.0, 20.0, 10.0, "Choir practice 14:00"),
        Block::text(80.0, 20.0, 10.0, "Youth group 16:00"),
    ];
    let result = optimize(&blocks, &LayoutOptions::default());

    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].section_type, SectionType::List);
    assert_eq!(result.sections[0].layout_strategy, LayoutStrategy::ListVertical);
    assert_eq!(result.sections[0].background_color, DEFAULT_BACKGROUND);
    assert_eq!(result.sections[0].priority, 5);
}

#[test]
fn test_palette_advances_only_on_colored_sections() {
    let blocks = vec![
        Block::text(0.0, 20.0, 16.0, "Title one"),
        Block::text(60.0, 20.0, 10.0, "A card"),
        Block::text(120.0, 20.0, 16.0, "Title two"),
        Block::text(200.0, 20.0, 16.0, "Title three"),
        Block::image(225.0, 200.0, 350.0),
    ];
    let result = optimize(&blocks, &election());

    let summary: Vec<_> = result
        .sections
        .iter()
        .map(|s| (s.section_type, s.background_color.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (SectionType::Title, "#E11D48"),
            (SectionType::Card, CARD_BACKGROUND),
            (SectionType::Title, "#DC2626"),
            (SectionType::Hero, "#F59E0B"),
        ]
    );
    assert_eq!(result.layout_info.color_sections, 4);
}

#[test]
fn test_unrecognized_content_type_uses_newsletter_palette() {
    let blocks = vec![Block::text(0.0, 20.0, 16.0, "Weekly bulletin")];
    let options = LayoutOptions::new().with_content_type("church");
    let result = optimize(&blocks, &options);

    assert_eq!(result.sections[0].background_color, "#4CAF50");
    assert_eq!(result.layout_info.content_type, "church");
}

#[test]
fn test_empty_input() {
    let result = optimize(&[], &election());

    assert!(result.sections.is_empty());
    assert_eq!(result.layout_info.total_sections, 0);
    assert!(!result.layout_info.has_hero);
    assert_eq!(result.layout_info.color_sections, 0);
    assert_eq!(result.layout_info.analyzed_blocks.total(), 0);
    assert_eq!(result.layout_info.content_type, "election");
}

#[test]
fn test_tied_y_order_decides_title_split() {
    let title = Block::text(0.0, 20.0, 16.0, "Title");
    let body = Block::text(0.0, 10.0, 10.0, "Body");

    // Title first: title followed by small text splits.
    let sections = LayoutOptimizer::new().group_into_sections(&[title.clone(), body.clone()]);
    assert_eq!(sections.len(), 2);

    // Body first: no rule fires, one section.
    let sections = LayoutOptimizer::new().group_into_sections(&[body, title]);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].blocks[0].content(), "Body");
}

#[test]
fn test_kindless_block_occupies_a_position() {
    // Without the middle block, title followed by body text would split.
    let blocks = vec![
        Block::text(0.0, 20.0, 16.0, "Title"),
        Block::unknown(25.0, 10.0),
        Block::text(40.0, 10.0, 10.0, "Body"),
    ];
    let result = optimize(&blocks, &LayoutOptions::default());
    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.sections[0].section_type, SectionType::Title);
    assert_eq!(result.sections[0].metadata.block_count, 3);

    let without = vec![blocks[0].clone(), blocks[2].clone()];
    assert_eq!(optimize(&without, &LayoutOptions::default()).sections.len(), 2);
}

#[test]
fn test_flyer_page() {
    let blocks = vec![
        // Header: title, subtitle, portrait
        Block::text(20.0, 30.0, 24.0, "Vote Kim for Council"),
        Block::text(52.0, 16.0, 12.0, "District 7"),
        Block::image(72.0, 280.0, 340.0),
        // Pledges, 20pt below the portrait
        Block::text(372.0, 14.0, 10.0, "Lower transit fares"),
        Block::text(390.0, 14.0, 10.0, "More parks"),
        Block::text(408.0, 14.0, 10.0, "Safer crossings"),
        // Footer icons after a wide gap
        Block::image(480.0, 40.0, 120.0),
        Block::image(480.0, 40.0, 120.0),
    ];
    let result = optimize(&blocks, &election());

    let types: Vec<_> = result.sections.iter().map(|s| s.section_type).collect();
    assert_eq!(
        types,
        vec![SectionType::Hero, SectionType::List, SectionType::Card]
    );

    let info = &result.layout_info;
    assert_eq!(info.analyzed_blocks.titles, 1);
    assert_eq!(info.analyzed_blocks.subtitles, 1);
    assert_eq!(info.analyzed_blocks.body_texts, 3);
    assert_eq!(info.analyzed_blocks.main_images, 1);
    assert_eq!(info.analyzed_blocks.icons, 2);
    assert_eq!(result.block_count(), blocks.len());
}
