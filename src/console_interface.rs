use std::io::{self, BufRead, Write};
use std::process::{Command, Stdio};

use clap::ValueEnum;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

use crate::core::{Direction, Grid, MOVE_PROMPT, UserAction, WIN_MESSAGE};
use crate::game_loop::{Display, InputSource};
use crate::glyphs::GlyphSet;
use crate::models::{Frame, Pos};

pub fn parse_token(token: &str) -> UserAction {
    match token {
        "w" => UserAction::Move(Direction::Up),
        "a" => UserAction::Move(Direction::Left),
        "s" => UserAction::Move(Direction::Down),
        "d" => UserAction::Move(Direction::Right),
        _ => UserAction::Idle,
    }
}

pub fn render_game_to_string(grid: &Grid, actor: Pos, glyphs: GlyphSet) -> String {
    let mut result = String::new();
    for (y, row) in grid.rows().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            let pos = Pos {
                x: x as i32,
                y: y as i32,
            };
            if pos == actor {
                result.push_str(glyphs.actor());
            } else {
                result.push_str(glyphs.cell(c));
            }
        }
        result.push('\n');
    }
    result
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ClearMethod {
    /// Run the host's own clear command (`cls` on Windows, `clear` elsewhere).
    #[default]
    Native,
    /// Emit the clear-screen escape sequence.
    Ansi,
    /// Leave previous frames on screen.
    #[value(name = "none")]
    Off,
}

fn clear_native() -> io::Result<()> {
    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/c", "cls"]);
        cmd
    } else {
        Command::new("clear")
    };
    let status = cmd.stdout(Stdio::inherit()).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("clear command exited with {status}")))
    }
}

/// Plain line-oriented output: frame, coordinates, then the prompt on an unterminated line.
pub struct LineDisplay<W: Write> {
    out: W,
    clear: ClearMethod,
}

impl<W: Write> LineDisplay<W> {
    pub fn new(out: W, clear: ClearMethod) -> Self {
        Self { out, clear }
    }
}

#[cfg(test)]
impl<W: Write> LineDisplay<W> {
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for LineDisplay<W> {
    fn clear(&mut self) -> io::Result<()> {
        match self.clear {
            ClearMethod::Native => {
                self.out.flush()?;
                clear_native()
            }
            ClearMethod::Ansi => crossterm::execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)),
            ClearMethod::Off => Ok(()),
        }
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        write!(self.out, "{}", frame.text)?;
        writeln!(
            self.out,
            "Current position: x:{}, y:{}",
            frame.position.x, frame.position.y
        )?;
        write!(self.out, "{}", MOVE_PROMPT)?;
        self.out.flush()
    }

    fn write_win(&mut self, _frame: &Frame) -> io::Result<()> {
        writeln!(self.out, "{}", WIN_MESSAGE)?;
        self.out.flush()
    }
}

pub struct LineInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf)),
        }
    }
}
