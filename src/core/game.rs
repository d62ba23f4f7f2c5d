use log::{debug, info};

use crate::core::actor::Actor;
use crate::core::{GamePhase, Grid, MoveUpdate, Pos, TurnOutcome, UserAction, attempt_move};
use crate::error::GridError;

/// Grid plus mouse, advanced one turn at a time until the mouse reaches the goal.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    actor: Actor,
    phase: GamePhase,
    turn: u32,
}

impl Game {
    pub fn new(grid: Grid, start: Pos) -> Result<Game, GridError> {
        if !grid.is_passable(&start) {
            return Err(GridError::ImpassableStart {
                x: start.x,
                y: start.y,
            });
        }
        let phase = if start == grid.goal() {
            GamePhase::Won
        } else {
            GamePhase::Playing
        };
        info!(
            "new game on {}x{} grid, start x:{}, y:{}, goal x:{}, y:{}",
            grid.width(),
            grid.height(),
            start.x,
            start.y,
            grid.goal().x,
            grid.goal().y
        );
        Ok(Game {
            grid,
            actor: Actor::new(start),
            phase,
            turn: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Pos {
        self.actor.position()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Applies one action. Once won, further actions are ignored.
    pub fn play_turn(&mut self, action: UserAction) -> TurnOutcome {
        if self.is_won() {
            return TurnOutcome::Ignored;
        }
        self.turn = self.turn.saturating_add(1);

        let dir = match action {
            UserAction::Move(dir) => dir,
            UserAction::Idle => return TurnOutcome::Ignored,
        };

        match attempt_move(dir, &self.grid, self.actor.position()) {
            MoveUpdate::Blocked(reason) => {
                debug!("turn {}: {:?} blocked by {:?}", self.turn, dir, reason);
                TurnOutcome::Blocked(reason)
            }
            MoveUpdate::NextPosition(next) => {
                self.actor.set_position(next);
                debug!("turn {}: {:?} to x:{}, y:{}", self.turn, dir, next.x, next.y);
                if next == self.grid.goal() {
                    self.phase = GamePhase::Won;
                    info!("goal reached on turn {}", self.turn);
                    TurnOutcome::Won(next)
                } else {
                    TurnOutcome::Moved(next)
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{Direction, START, build_grid};

    #[test]
    fn turn_counter_stops_at_max() {
        let mut game = Game::new(build_grid(), START).unwrap();
        game.turn = u32::MAX;

        assert_eq!(game.play_turn(UserAction::Idle), TurnOutcome::Ignored);
        assert_eq!(
            game.play_turn(UserAction::Move(Direction::Right)),
            TurnOutcome::Moved(Pos { x: 2, y: 1 })
        );
        assert_eq!(game.turn(), u32::MAX);
    }
}
