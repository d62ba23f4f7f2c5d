use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Cell, Pos};
use crate::error::GridError;

/// Immutable maze layout. The goal coordinate is found once, when the grid is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    bounds: BoundsOriginRoot,
    cells: Vec<Cell>,
    goal: Pos,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Grid, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found,
            });
        }

        let bounds = BoundsOriginRoot::new(width as i32, rows.len() as i32);
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();

        let mut goals = cells
            .iter()
            .enumerate()
            .filter(|&(_, c)| *c == Cell::Goal)
            .map(|(index, _)| Pos {
                x: (index % width) as i32,
                y: (index / width) as i32,
            });
        let goal = goals.next().ok_or(GridError::MissingGoal)?;
        let extra = goals.count();
        if extra > 0 {
            return Err(GridError::MultipleGoals { count: extra + 1 });
        }

        Ok(Grid { bounds, cells, goal })
    }

    pub fn width(&self) -> i32 {
        self.bounds.extent.x
    }

    pub fn height(&self) -> i32 {
        self.bounds.extent.y
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn get(&self, pos: &Pos) -> Option<Cell> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(self.cells[self.bounds.index_of(pos)])
    }

    pub fn is_passable(&self, pos: &Pos) -> bool {
        matches!(self.get(pos), Some(Cell::Floor | Cell::Goal))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width() as usize)
    }
}

#[cfg(test)]
impl std::ops::Index<&Pos> for Grid {
    type Output = Cell;

    fn index(&self, index: &Pos) -> &Self::Output {
        &self.cells[self.bounds.index_of(index)]
    }
}

#[cfg(test)]
impl Grid {
    pub fn has_solid_border(&self) -> bool {
        self.positions()
            .filter(|pos| self.bounds.is_edge(pos))
            .all(|pos| self.get(&pos) == Some(Cell::Wall))
    }

    /// Every coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height()).flat_map(move |y| (0..self.width()).map(move |x| Pos { x, y }))
    }
}
