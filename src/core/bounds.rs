use crate::core::Pos;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Pos,
}

impl BoundsOriginRoot {
    pub fn new(width: i32, height: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Pos { x: width, y: height },
        }
    }

    pub fn contains(&self, pos: &Pos) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    /// Index of `pos` in a row-major backing store. Caller checks `contains` first.
    pub fn index_of(&self, pos: &Pos) -> usize {
        (pos.y * self.extent.x + pos.x) as usize
    }
}

#[cfg(test)]
impl BoundsOriginRoot {
    pub fn is_edge(&self, pos: &Pos) -> bool {
        self.contains(pos)
            && (pos.x == 0 || pos.y == 0 || pos.x == self.extent.x - 1 || pos.y == self.extent.y - 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let bounds = BoundsOriginRoot::new(3, 2);

        assert!(bounds.contains(&Pos { x: 0, y: 0 }));
        assert!(bounds.contains(&Pos { x: 2, y: 1 }));
        assert!(!bounds.contains(&Pos { x: 3, y: 1 }));
        assert!(!bounds.contains(&Pos { x: 2, y: 2 }));
        assert!(!bounds.contains(&Pos { x: -1, y: 0 }));
        assert!(!bounds.contains(&Pos { x: 0, y: -1 }));
    }

    #[test]
    fn edge_cells_form_the_outer_ring() {
        let bounds = BoundsOriginRoot::new(4, 4);

        assert!(bounds.is_edge(&Pos { x: 0, y: 2 }));
        assert!(bounds.is_edge(&Pos { x: 3, y: 3 }));
        assert!(!bounds.is_edge(&Pos { x: 1, y: 2 }));
        assert!(!bounds.is_edge(&Pos { x: 4, y: 0 }));
    }
}
