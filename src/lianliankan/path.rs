use crate::lianliankan::prelude::*;

/// One validated connection between two cells: an axis-aligned polyline
/// from `start` to `end` whose turn points are `corners` (0, 1 or 2 of
/// them). Paths are ephemeral; they are computed on demand for highlight
/// and animation and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub start: Cell,
    pub end: Cell,
    pub corners: Vec<Cell>,
}

impl Path {
    /// The number of turns taken.
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }
}

/// Finds a connection of at most two turns between two cells, or reports
/// that none exists. Purely geometric: kind equality is the caller's
/// gating condition.
///
/// The three tiers are tried in order and the first hit wins:
/// 1. straight line,
/// 2. one corner, trying `(start.x, end.y)` then `(end.x, start.y)` — an
///    arbitrary but deterministic preference that downstream highlighting
///    relies on,
/// 3. two corners, sweeping vertical rails at ascending x in -1..=width,
///    then horizontal rails at ascending y in -1..=height. The sweep runs
///    one cell beyond each board edge on purpose: a path may hook around
///    the outside of the visible grid.
pub fn connect(start: Cell, end: Cell, obstacles: &CellSet, width: i32, height: i32) -> Option<Path> {
    if (start.x == end.x || start.y == end.y) && straight_clear(start, end, obstacles) {
        return Some(Path { start, end, corners: vec![] });
    }
    one_corner(start, end, obstacles).or_else(|| two_corners(start, end, obstacles, width, height))
}

/// Whether the straight segment between two aligned cells is free of
/// obstacles. The test is exclusive: only cells strictly between the
/// endpoints count, so the endpoints themselves never block.
fn straight_clear(a: Cell, b: Cell, obstacles: &CellSet) -> bool {
    if a.x == b.x {
        let [lo, hi] = [a.y.min(b.y), a.y.max(b.y)];
        (lo + 1..hi).all(|y| !obstacles.contains(&Cell::new(a.x, y)))
    } else if a.y == b.y {
        let [lo, hi] = [a.x.min(b.x), a.x.max(b.x)];
        (lo + 1..hi).all(|x| !obstacles.contains(&Cell::new(x, a.y)))
    } else {
        false
    }
}

/// Tier 2: a single corner at one of the two rectangle corners spanned by
/// the endpoints. The corner cell must be unoccupied and both legs clear.
fn one_corner(start: Cell, end: Cell, obstacles: &CellSet) -> Option<Path> {
    let candidates = [Cell::new(start.x, end.y), Cell::new(end.x, start.y)];

    for corner in candidates {
        if !obstacles.contains(&corner)
            && straight_clear(start, corner, obstacles)
            && straight_clear(corner, end, obstacles)
        {
            return Some(Path { start, end, corners: vec![corner] });
        }
    }
    None
}

/// Tier 3: two corners on a shared rail. For a vertical rail at x the
/// path is start -> (x, start.y) -> (x, end.y) -> end; horizontal rails
/// are symmetric. Rail coordinates matching either endpoint are skipped,
/// since those routes are already covered by tiers 1 and 2.
fn two_corners(start: Cell, end: Cell, obstacles: &CellSet, width: i32, height: i32) -> Option<Path> {
    for x in -1..=width {
        if x == start.x || x == end.x {
            continue;
        }
        let [c1, c2] = [Cell::new(x, start.y), Cell::new(x, end.y)];
        if !obstacles.contains(&c1)
            && !obstacles.contains(&c2)
            && straight_clear(start, c1, obstacles)
            && straight_clear(c1, c2, obstacles)
            && straight_clear(c2, end, obstacles)
        {
            return Some(Path { start, end, corners: vec![c1, c2] });
        }
    }

    for y in -1..=height {
        if y == start.y || y == end.y {
            continue;
        }
        let [c1, c2] = [Cell::new(start.x, y), Cell::new(end.x, y)];
        if !obstacles.contains(&c1)
            && !obstacles.contains(&c2)
            && straight_clear(start, c1, obstacles)
            && straight_clear(c1, c2, obstacles)
            && straight_clear(c2, end, obstacles)
        {
            return Some(Path { start, end, corners: vec![c1, c2] });
        }
    }

    None
}
