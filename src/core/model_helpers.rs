use crate::core::consts::REFERENCE_LAYOUT;
use crate::core::{Direction, Grid, Pos};

impl Direction {
    pub fn offset(self) -> Pos {
        match self {
            Direction::Up => Pos { x: 0, y: -1 },
            Direction::Down => Pos { x: 0, y: 1 },
            Direction::Left => Pos { x: -1, y: 0 },
            Direction::Right => Pos { x: 1, y: 0 },
        }
    }
}

impl Pos {
    pub fn shifted(self, dir: Direction) -> Pos {
        let offset = dir.offset();
        Pos {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}

#[cfg(test)]
impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
impl crate::core::UserAction {
    pub fn all_actions() -> Vec<crate::core::UserAction> {
        Direction::all()
            .into_iter()
            .map(crate::core::UserAction::Move)
            .collect()
    }
}

/// The fixed maze the game ships with.
pub fn build_grid() -> Grid {
    let rows = REFERENCE_LAYOUT.iter().map(|row| row.to_vec()).collect();
    Grid::from_rows(rows).expect("reference layout is rectangular with a single goal")
}
