use crate::lianliankan::prelude::*;

/// A board coordinate. Signed on purpose: two-corner connection paths are
/// allowed to run along the rails one cell outside the visible grid, so
/// corner cells at x = -1, x = width, y = -1 and y = height are legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Constructs a new cell.
    pub fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Determines whether or not the cell is on the board rectangle.
    pub fn in_bounds(&self, width: i32, height: i32) -> bool {
        0 <= self.x && self.x < width && 0 <= self.y && self.y < height
    }

    /// The canonical notation of the cell.
    pub fn notate(&self) -> String {
        format!("({},{})", self.x, self.y)
    }
}

/// Simple offset pair that can be used to calculate neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

/// Offsets that turn a cell into one of its 8 surrounding neighbours,
/// used by the generator's anti-clustering constraint.
pub static ADJACENT_OFFSETS: [Offset; 8] = [
    Offset { dx: -1, dy: -1 },
    Offset { dx: -1, dy: 0 },
    Offset { dx: -1, dy: 1 },
    Offset { dx: 0, dy: -1 },
    Offset { dx: 0, dy: 1 },
    Offset { dx: 1, dy: -1 },
    Offset { dx: 1, dy: 0 },
    Offset { dx: 1, dy: 1 },
];

impl Add<&Offset> for &Cell {
    type Output = Cell;
    fn add(self, rhs: &Offset) -> Self::Output {
        Cell {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl Add<Offset> for Cell {
    type Output = Cell;
    fn add(self, rhs: Offset) -> Self::Output {
        &self + &rhs
    }
}
