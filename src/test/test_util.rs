use std::collections::VecDeque;
use std::io;

pub use dissimilar::diff as __diff;

use crate::console_interface::{parse_token, render_game_to_string};
use crate::core::{Cell, Direction, Game, Grid, Pos, START, TurnOutcome, UserAction};
use crate::error::GridError;
use crate::game_loop::{Display, InputSource};
use crate::glyphs::GlyphSet;
use crate::models::Frame;

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub const REFERENCE_LEVEL: &str = r#"
##########
#M       #
# ###### #
# ###### #
# ########
#     ####
##### ####
##### ####
#C    ####
##########
"#;

/// Reads a level drawn with the ascii glyphs: `#` wall, ` ` floor, `C` goal, `M` mouse on floor.
/// Blank lines are skipped. Without an `M` the mouse starts at `START`.
pub fn parse_level(s: &str) -> Result<(Grid, Pos), GridError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut start = START;

    for line in s.lines().filter(|line| !line.is_empty()) {
        let y = rows.len();
        let mut row = Vec::new();
        for (x, ch) in line.chars().enumerate() {
            let c = match ch {
                '#' => Cell::Wall,
                ' ' => Cell::Floor,
                'C' => Cell::Goal,
                'M' => {
                    start = Pos {
                        x: x as i32,
                        y: y as i32,
                    };
                    Cell::Floor
                }
                symbol => panic!("unknown level symbol {:?} at x:{}, y:{}", symbol, x, y),
            };
            row.push(c);
        }
        rows.push(row);
    }

    Ok((Grid::from_rows(rows)?, start))
}

pub struct GameTestState {
    pub game: Game,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let (grid, start) = parse_level(level).expect("test level parses");
        let game = Game::new(grid, start).expect("test level has a passable start");
        Self { game }
    }

    pub fn position(&self) -> Pos {
        self.game.position()
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(self.game.grid(), self.game.position(), GlyphSet::Ascii)
            .trim_matches('\n')
            .into()
    }

    pub fn assert_move(&mut self, direction: Direction) -> TurnOutcome {
        let outcome = self.game.play_turn(UserAction::Move(direction));
        let (TurnOutcome::Moved(_) | TurnOutcome::Won(_)) = outcome else {
            panic!("Expected move, got {:?}, in map\n{}", outcome, self.game_to_string());
        };
        outcome
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn try_move(&mut self, direction: Direction) -> TurnOutcome {
        self.game.play_turn(UserAction::Move(direction))
    }

    pub fn send(&mut self, token: &str) -> TurnOutcome {
        self.game.play_turn(parse_token(token))
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}

/// Feeds canned lines to the game loop, then reports input closed.
pub struct ScriptedInput {
    lines: VecDeque<io::Result<String>>,
}

impl ScriptedInput {
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            lines: tokens.iter().map(|t| Ok(format!("{}\n", t))).collect(),
        }
    }

    pub fn push_error(&mut self) {
        self.lines
            .push_back(Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")));
    }

    pub fn push(&mut self, token: &str) {
        self.lines.push_back(Ok(format!("{}\n", token)));
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.pop_front() {
            Some(line) => line.map(Some),
            None => Ok(None),
        }
    }
}

/// Remembers everything the game loop asked it to show.
#[derive(Default)]
pub struct RecordingDisplay {
    pub clears: usize,
    pub frames: Vec<Frame>,
    pub wins: Vec<Frame>,
    pub fail_clear: bool,
}

impl Display for RecordingDisplay {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        if self.fail_clear {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no clear command"));
        }
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn write_win(&mut self, frame: &Frame) -> io::Result<()> {
        self.wins.push(frame.clone());
        Ok(())
    }
}

pub fn assert_symbols_match(expected: &str, actual: &str) {
    assert_eq_text!(expected.trim_matches('\n'), actual.trim_matches('\n'));
}
