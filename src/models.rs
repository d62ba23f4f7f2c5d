use crate::console_interface::render_game_to_string;
pub(crate) use crate::core::{Cell, Pos};
use crate::core::{Game, TurnOutcome};
use crate::glyphs::GlyphSet;

/// One drawn turn: the rendered maze and where the mouse is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub position: Pos,
    pub last_outcome: Option<TurnOutcome>,
}

impl Frame {
    pub fn capture(game: &Game, glyphs: GlyphSet, last_outcome: Option<TurnOutcome>) -> Frame {
        Frame {
            text: render_game_to_string(game.grid(), game.position(), glyphs),
            position: game.position(),
            last_outcome,
        }
    }
}

pub struct GameRenderState<'a> {
    pub frame: &'a Frame,
    pub won: bool,
}
