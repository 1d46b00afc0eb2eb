use crate::lianliankan::prelude::*;

/// Transient per-tile state owned by gameplay modifiers (periodic rotation,
/// tile movement, fading, freezing). The engine never reads these; the
/// caller mutates them between connectivity queries and the engine only
/// ever answers against the tile positions it is handed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Effects {
    pub frozen: bool,
    pub fading: bool,
    pub moving: bool,
    pub rotation: f32,
}

/// A single playable cell's occupant, carrying a kind used for matching.
/// Exactly two tiles of each generated pair share a kind value; kind values
/// repeat across pairs when the kind count is smaller than the pair count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Unique within a board, stable for the tile's lifetime.
    pub id: usize,
    /// Matching group, in 1..=kinds.
    pub kind: u32,
    pub position: Cell,
    /// Flips to true exactly once, when the tile is matched away.
    pub matched: bool,
    pub selected: bool,
    pub effects: Effects,
}

impl Tile {
    /// Constructs a fresh unmatched, unselected tile.
    pub fn new(id: usize, kind: u32, position: Cell) -> Tile {
        Tile {
            id,
            kind,
            position,
            matched: false,
            selected: false,
            effects: Effects::default(),
        }
    }
}

/// The set of occupied cells that block a connection: every unmatched
/// tile except the two endpoints of the query.
pub fn obstacles_between(tiles: &[Tile], a: usize, b: usize, width: i32, height: i32) -> CellSet {
    let mut set = CellSet::new(width, height);
    for tile in tiles {
        if !tile.matched && tile.id != a && tile.id != b {
            set.insert(&tile.position);
        }
    }
    set
}
