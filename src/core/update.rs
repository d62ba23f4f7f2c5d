use crate::core::{BlockReason, Cell, Direction, Grid, MoveUpdate, Pos};

/// Validates one step of the mouse. Walls and cells off the grid block the move.
pub fn attempt_move(dir: Direction, grid: &Grid, current: Pos) -> MoveUpdate {
    let candidate = current.shifted(dir);
    match grid.get(&candidate) {
        None => MoveUpdate::Blocked(BlockReason::OutOfBounds),
        Some(Cell::Wall) => MoveUpdate::Blocked(BlockReason::Wall),
        Some(Cell::Floor | Cell::Goal) => MoveUpdate::NextPosition(candidate),
    }
}
