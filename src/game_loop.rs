use std::io;

use log::{debug, info, warn};

use crate::console_interface::parse_token;
use crate::core::{Game, GamePhase};
use crate::error::GameError;
use crate::glyphs::GlyphSet;
use crate::models::Frame;

/// Where frames go. `clear` is cosmetic; the loop ignores its failures.
pub trait Display {
    fn clear(&mut self) -> io::Result<()>;
    fn write_frame(&mut self, frame: &Frame) -> io::Result<()>;
    fn write_win(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Where move tokens come from. `Ok(None)` means input is closed for good.
pub trait InputSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Won { turns: u32 },
    InputClosed { turns: u32 },
}

pub fn run<D: Display, I: InputSource>(
    game: &mut Game,
    display: &mut D,
    input: &mut I,
    glyphs: GlyphSet,
) -> Result<RunOutcome, GameError> {
    let mut last_outcome = None;

    while game.phase() == GamePhase::Playing {
        if let Err(err) = display.clear() {
            debug!("screen clear failed: {}", err);
        }

        let frame = Frame::capture(game, glyphs, last_outcome);
        display.write_frame(&frame).map_err(GameError::Display)?;

        let line = match input.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("input closed after {} turns", game.turn());
                return Ok(RunOutcome::InputClosed { turns: game.turn() });
            }
            Err(err) => {
                warn!("failed to read input: {}", err);
                String::new()
            }
        };

        last_outcome = Some(game.play_turn(parse_token(line.trim())));
    }

    let frame = Frame::capture(game, glyphs, last_outcome);
    display.write_win(&frame).map_err(GameError::Display)?;
    Ok(RunOutcome::Won { turns: game.turn() })
}
