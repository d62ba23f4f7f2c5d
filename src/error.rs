use std::io;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout has no goal cell")]
    MissingGoal,
    #[error("layout has {count} goal cells, expected exactly one")]
    MultipleGoals { count: usize },
    #[error("start position x:{x}, y:{y} is not a passable cell")]
    ImpassableStart { x: i32, y: i32 },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to write frame")]
    Display(#[source] io::Error),
    #[error("failed to set up terminal")]
    TerminalSetup(#[source] io::Error),
    #[error("failed to restore terminal")]
    TerminalCleanup(#[source] io::Error),
}
