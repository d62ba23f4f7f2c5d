// Terminal maze: steer the mouse to the cheese.
// Controls: w/a/s/d then Enter (line mode), or WASD / arrow keys (tui mode, Esc to quit).

mod console_interface;
mod core;
mod error;
mod game_loop;
mod glyphs;
mod models;
mod tui_interface;
#[cfg(test)]
mod test;

use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::console_interface::{ClearMethod, LineDisplay, LineInput};
use crate::core::{Game, START, build_grid};
use crate::error::GameError;
use crate::game_loop::{RunOutcome, run};
use crate::glyphs::GlyphSet;
use crate::tui_interface::{KeyInput, TuiDisplay, cleanup_terminal, setup_terminal, wait_for_key};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Redraw on stdout and read one move per line from stdin.
    #[default]
    Line,
    /// Full-screen terminal UI with immediate key input.
    Tui,
}

#[derive(Parser, Debug)]
#[command(name = "mouse_maze", about = "Guide the mouse through the maze to the cheese")]
struct Cli {
    #[arg(value_enum, default_value_t = Mode::Line)]
    mode: Mode,

    #[arg(long, value_enum, default_value_t = GlyphSet::Emoji)]
    glyphs: GlyphSet,

    /// How the screen is cleared between frames in line mode.
    #[arg(long, value_enum, default_value_t = ClearMethod::Native)]
    clear: ClearMethod,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut game = Game::new(build_grid(), START).context("invalid starting position")?;

    let outcome = match cli.mode {
        Mode::Line => run_line(&mut game, &cli)?,
        Mode::Tui => run_tui(&mut game, &cli)?,
    };
    info!("game finished: {:?}", outcome);

    Ok(())
}

fn run_line(game: &mut Game, cli: &Cli) -> anyhow::Result<RunOutcome> {
    let mut display = LineDisplay::new(io::stdout().lock(), cli.clear);
    let mut input = LineInput::new(io::stdin().lock());
    run(game, &mut display, &mut input, cli.glyphs).context("line mode game loop failed")
}

fn run_tui(game: &mut Game, cli: &Cli) -> anyhow::Result<RunOutcome> {
    let terminal = setup_terminal()?;
    let mut display = TuiDisplay::new(terminal);

    let result = run(game, &mut display, &mut KeyInput, cli.glyphs)
        .context("tui mode game loop failed")
        .and_then(|outcome| {
            if let RunOutcome::Won { .. } = outcome {
                wait_for_key().context("failed to read key after win")?;
            }
            Ok(outcome)
        });

    // Restore the terminal even when the loop failed.
    let cleanup = cleanup_terminal();
    finish_tui(result, cleanup)
}

/// The loop's own error wins over a failed terminal restore.
fn finish_tui<T>(result: anyhow::Result<T>, cleanup: Result<(), GameError>) -> anyhow::Result<T> {
    match (result, cleanup) {
        (Ok(value), cleanup) => {
            cleanup?;
            Ok(value)
        }
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(cleanup_err)) => {
            warn!("{} after game loop error", cleanup_err);
            Err(err)
        }
    }
}
