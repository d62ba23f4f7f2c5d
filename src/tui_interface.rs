use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::core::WIN_MESSAGE;
use crate::error::GameError;
use crate::game_loop::{Display, InputSource};
use crate::models::{Frame, GameRenderState};

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, GameError> {
    crossterm::terminal::enable_raw_mode().map_err(GameError::TerminalSetup)?;
    let terminal = crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    undo_on_error(terminal, || {
        if let Err(e) = cleanup_terminal() {
            warn!("could not undo partial terminal setup: {}", e);
        }
    })
    .map_err(GameError::TerminalSetup)
}

/// Runs `undo` if `result` failed. The original error is returned untouched.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

pub fn cleanup_terminal() -> Result<(), GameError> {
    crossterm::terminal::disable_raw_mode().map_err(GameError::TerminalCleanup)?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)
        .map_err(GameError::TerminalCleanup)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> io::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let maze_paragraph = Paragraph::new(state.frame.text.as_str())
            .block(Block::default().borders(Borders::ALL).title("Mouse Maze"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(maze_paragraph, chunks[0]);

        f.render_widget(
            Paragraph::new(status_line(state))
                .block(Block::default().borders(Borders::ALL).title("Status"))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center),
            chunks[1],
        );
    })?;
    Ok(())
}

pub fn status_line(state: &GameRenderState) -> String {
    if state.won {
        return format!("{} Press any key to quit.", WIN_MESSAGE);
    }

    let position = state.frame.position;
    let status = format!(
        "Current position: x:{}, y:{} | Controls: WASD or Arrow keys to move, Esc to quit",
        position.x, position.y
    );
    match &state.frame.last_outcome {
        Some(outcome) => format!("{} | Last: {:?}", status, outcome),
        None => status,
    }
}

/// Move token for a key press. `None` closes input.
pub fn key_token(code: KeyCode, modifiers: KeyModifiers) -> Option<String> {
    match code {
        KeyCode::Esc => None,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Up => Some("w".to_string()),
        KeyCode::Left => Some("a".to_string()),
        KeyCode::Down => Some("s".to_string()),
        KeyCode::Right => Some("d".to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => Some(String::new()),
    }
}

fn next_key_press() -> io::Result<(KeyCode, KeyModifiers)> {
    loop {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok((code, modifiers));
        }
    }
}

/// Keep the win screen up until the player presses something.
pub fn wait_for_key() -> io::Result<()> {
    next_key_press().map(|_| ())
}

pub struct TuiDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TuiDisplay {
    pub fn new(terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Self {
        Self { terminal }
    }
}

impl Display for TuiDisplay {
    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        render_game(&mut self.terminal, &GameRenderState { frame, won: false })
    }

    fn write_win(&mut self, frame: &Frame) -> io::Result<()> {
        render_game(&mut self.terminal, &GameRenderState { frame, won: true })
    }
}

pub struct KeyInput;

impl InputSource for KeyInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let (code, modifiers) = next_key_press()?;
        Ok(key_token(code, modifiers))
    }
}
