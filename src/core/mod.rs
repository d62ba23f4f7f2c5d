mod actor;
mod bounds;
mod consts;
mod game;
mod grid;
mod model_helpers;
mod models;
mod update;

pub use consts::*;
pub use game::Game;
pub use grid::Grid;
pub use model_helpers::build_grid;
pub use models::{
    BlockReason, Cell, Direction, GamePhase, MoveUpdate, Pos, TurnOutcome, UserAction,
};
pub use update::attempt_move;
