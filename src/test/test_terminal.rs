use std::io;

use anyhow::Context;

use crate::error::GameError;
use crate::finish_tui;
use crate::game_loop::RunOutcome;

fn restore_failure() -> Result<(), GameError> {
    Err(GameError::TerminalCleanup(io::Error::other("tty gone")))
}

#[test]
fn loop_error_is_reported_before_cleanup_error() {
    let result: anyhow::Result<RunOutcome> =
        Err(anyhow::anyhow!("key read failed")).context("tui mode game loop failed");

    let err = finish_tui(result, restore_failure()).unwrap_err();

    assert_eq!(err.to_string(), "tui mode game loop failed");
    assert!(format!("{:#}", err).contains("key read failed"));
}

#[test]
fn cleanup_error_is_reported_when_loop_succeeded() {
    let result = finish_tui(Ok(RunOutcome::InputClosed { turns: 3 }), restore_failure());

    assert_eq!(result.unwrap_err().to_string(), "failed to restore terminal");
}

#[test]
fn clean_run_returns_loop_outcome() {
    let outcome = finish_tui(Ok(RunOutcome::Won { turns: 15 }), Ok(())).unwrap();

    assert_eq!(outcome, RunOutcome::Won { turns: 15 });
}
