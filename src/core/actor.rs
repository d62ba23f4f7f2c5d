use crate::core::Pos;

/// The mouse. Only `Game` moves it, and only to positions the validator accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    pos: Pos,
}

impl Actor {
    pub fn new(pos: Pos) -> Actor {
        Actor { pos }
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    pub fn set_position(&mut self, pos: Pos) {
        self.pos = pos;
    }
}
