//! Background colour palettes.

use crate::model::SectionType;

use super::ContentType;

/// Background for card sections.
pub const CARD_BACKGROUND: &str = "#FFFBF5";

/// Background for every other uncoloured section.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

const ELECTION_COLORS: &[&str] = &["#E11D48", "#DC2626", "#F59E0B", "#10B981", "#3B82F6"];

const NEWSLETTER_COLORS: &[&str] = &["#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#00BCD4"];

/// An ordered list of colours cycled across hero and title sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [&'static str],
}

impl Palette {
    /// Reds, amber, green and blue for election flyers.
    pub const ELECTION: Palette = Palette {
        colors: ELECTION_COLORS,
    };

    /// Material-style colours for newsletters and everything else.
    pub const NEWSLETTER: Palette = Palette {
        colors: NEWSLETTER_COLORS,
    };

    /// Palette for a content type. Only elections get their own.
    pub fn for_content_type(content_type: &ContentType) -> Self {
        match content_type {
            ContentType::Election => Palette::ELECTION,
            _ => Palette::NEWSLETTER,
        }
    }

    /// Colours in cycling order.
    pub fn colors(&self) -> &'static [&'static str] {
        self.colors
    }

    /// Colour at a position, wrapping around.
    pub fn color(&self, index: usize) -> &'static str {
        self.colors[index % self.colors.len()]
    }

    /// Start a fresh cursor over this palette.
    pub fn cursor(self) -> PaletteCursor {
        PaletteCursor::new(self)
    }
}

/// Hands out background colours for one optimization run.
///
/// The cursor only advances on coloured sections (hero and title), so
/// cards and plain sections in between do not consume palette entries.
#[derive(Debug, Clone)]
pub struct PaletteCursor {
    palette: Palette,
    index: usize,
}

impl PaletteCursor {
    /// Create a cursor starting at the first colour.
    pub fn new(palette: Palette) -> Self {
        Self { palette, index: 0 }
    }

    /// Background for the next section of the given type.
    pub fn background(&mut self, section_type: SectionType) -> &'static str {
        if section_type.is_colored() {
            let color = self.palette.color(self.index);
            self.index += 1;
            color
        } else if section_type == SectionType::Card {
            CARD_BACKGROUND
        } else {
            DEFAULT_BACKGROUND
        }
    }

    /// Number of palette colours handed out so far.
    pub fn used(&self) -> usize {
        self.index
    }
}
