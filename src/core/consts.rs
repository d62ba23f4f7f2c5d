use crate::core::Cell::{self, Floor, Goal, Wall};
use crate::core::Pos;

pub const START: Pos = Pos { x: 1, y: 1 };

pub const REFERENCE_WIDTH: usize = 10;
pub const REFERENCE_HEIGHT: usize = 10;

const W: Cell = Wall;
const F: Cell = Floor;
const G: Cell = Goal;

#[rustfmt::skip]
pub const REFERENCE_LAYOUT: [[Cell; REFERENCE_WIDTH]; REFERENCE_HEIGHT] = [
    [W, W, W, W, W, W, W, W, W, W],
    [W, F, F, F, F, F, F, F, F, W],
    [W, F, W, W, W, W, W, W, F, W],
    [W, F, W, W, W, W, W, W, F, W],
    [W, F, W, W, W, W, W, W, W, W],
    [W, F, F, F, F, F, W, W, W, W],
    [W, W, W, W, W, F, W, W, W, W],
    [W, W, W, W, W, F, W, W, W, W],
    [W, G, F, F, F, F, W, W, W, W],
    [W, W, W, W, W, W, W, W, W, W],
];

pub const WIN_MESSAGE: &str = "The cheese has been found!!!!";
pub const MOVE_PROMPT: &str = "Move (WASD): ";
