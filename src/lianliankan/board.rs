use itertools::Itertools;

use crate::lianliankan::{prelude::*, solvability};

/// The play-time surface over a generated tile list: answers connectivity
/// queries, applies matches, and finds hints. The board owns no hidden
/// state; everything it knows is the tile list it was built from, which
/// the caller may also mutate through [`Board::tile_mut`] (selection,
/// gameplay-modifier effects).
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Board {
    /// Wraps a generated tile list for play.
    pub fn new(width: i32, height: i32, tiles: Vec<Tile>) -> Board {
        Board { width, height, tiles }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Gets the tile with the given id.
    pub fn tile(&self, id: usize) -> Result<&Tile> {
        self.tiles
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow!("no tile with id {id} on this board"))
    }

    /// Gets the tile with the given id mutably, for caller-side state
    /// (selection, modifier effects).
    pub fn tile_mut(&mut self, id: usize) -> Result<&mut Tile> {
        self.tiles
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow!("no tile with id {id} on this board"))
    }

    /// Answers the connectivity query for two tiles: a path of at most two
    /// turns through currently-unmatched cells, or `None`.
    ///
    /// Purely geometric; the kind gate belongs to [`Board::match_pair`].
    /// Asking about a tile twice, or about an id not on the board, is a
    /// caller bug and fails rather than silently matching a tile to itself.
    pub fn connect_tiles(&self, a: usize, b: usize) -> Result<Option<Path>> {
        if a == b {
            return Err(anyhow!("cannot connect tile {a} to itself"));
        }
        let [ta, tb] = [self.tile(a)?, self.tile(b)?];

        let obstacles = obstacles_between(&self.tiles, a, b, self.width, self.height);
        Ok(connect(ta.position, tb.position, &obstacles, self.width, self.height))
    }

    /// The click-to-match transaction: both tiles must be unmatched, of
    /// equal kind, and connectable. On success both are marked matched
    /// (and deselected) and the path is returned for highlighting; a
    /// non-connectable or kind-mismatched selection returns `Ok(None)` so
    /// the caller can flash it as invalid.
    pub fn match_pair(&mut self, a: usize, b: usize) -> Result<Option<Path>> {
        let [ta, tb] = [self.tile(a)?, self.tile(b)?];
        if ta.matched || tb.matched {
            return Err(anyhow!("cannot match already-matched tiles {a} and {b}"));
        }
        if ta.kind != tb.kind {
            return Ok(None);
        }

        let Some(path) = self.connect_tiles(a, b)? else {
            return Ok(None);
        };

        for id in [a, b] {
            let tile = self.tile_mut(id)?;
            tile.matched = true;
            tile.selected = false;
        }
        Ok(Some(path))
    }

    /// The first currently-connectable pair, for inactivity hints.
    pub fn find_hint(&self) -> Option<(usize, usize)> {
        solvability::find_pair(&self.tiles, self.width, self.height)
    }

    /// Whether any legal move remains.
    pub fn any_move_available(&self) -> bool {
        self.find_hint().is_some()
    }

    /// Whether every tile on the board has been matched away.
    pub fn cleared(&self) -> bool {
        self.tiles.iter().all(|t| t.matched)
    }

    /// Pretty-prints the board: kinds in base 36, `.` for empty cells.
    pub fn pretty(&self) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        self.tiles
                            .iter()
                            .find(|t| !t.matched && t.position == Cell::new(x, y))
                            .map_or(".".into(), |t| {
                                char::from_digit(t.kind % 36, 36).unwrap_or('?').to_string()
                            })
                    })
                    .join("")
            })
            .join("\n")
    }
}
