use clap::ValueEnum;

use crate::core::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum GlyphSet {
    /// Brick walls, white floor, cheese and a mouse.
    #[default]
    Emoji,
    /// `#` walls, blank floor, `C` cheese and `M` mouse. Same symbols as test levels.
    Ascii,
}

impl GlyphSet {
    pub fn cell(self, cell: Cell) -> &'static str {
        match (self, cell) {
            (GlyphSet::Emoji, Cell::Wall) => "🟫",
            (GlyphSet::Emoji, Cell::Floor) => "⬜️",
            (GlyphSet::Emoji, Cell::Goal) => "🧀",
            (GlyphSet::Ascii, Cell::Wall) => "#",
            (GlyphSet::Ascii, Cell::Floor) => " ",
            (GlyphSet::Ascii, Cell::Goal) => "C",
        }
    }

    pub fn actor(self) -> &'static str {
        match self {
            GlyphSet::Emoji => "🐭",
            GlyphSet::Ascii => "M",
        }
    }
}
