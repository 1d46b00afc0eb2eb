use crate::lianliankan::prelude::*;

/// The strict checker: greedily pairs off unmatched tiles and demands that
/// every one of them ends up in a pair. This is the acceptance gate for
/// freshly generated boards.
///
/// Each tile is connected against the board as it currently stands, with
/// all other unmatched tiles as obstacles.
pub fn has_full_pairing(tiles: &[Tile], width: i32, height: i32) -> bool {
    let unmatched: Vec<&Tile> = tiles.iter().filter(|t| !t.matched).collect();
    let mut paired: HashSet<usize> = HashSet::new();

    for (i, &tile) in unmatched.iter().enumerate() {
        if paired.contains(&tile.id) {
            continue;
        }

        let partner = unmatched[i + 1..].iter().copied().find(|&other| {
            tile.kind == other.kind && connectable(tiles, tile, other, width, height)
        });

        match partner {
            Some(other) => {
                paired.insert(tile.id);
                paired.insert(other.id);
            }
            None => return false,
        }
    }

    paired.len() == unmatched.len()
}

/// The loose checker: every unmatched tile merely needs *some* reachable
/// partner, with no perfect-matching requirement. Used by the fallback
/// generator and for "is any move still available" queries, where
/// re-proving a full pairing after every move would be wasted work.
pub fn every_tile_has_partner(tiles: &[Tile], width: i32, height: i32) -> bool {
    let unmatched: Vec<&Tile> = tiles.iter().filter(|t| !t.matched).collect();

    unmatched.iter().all(|&tile| {
        unmatched.iter().any(|&other| {
            tile.id != other.id
                && tile.kind == other.kind
                && connectable(tiles, tile, other, width, height)
        })
    })
}

/// The first currently-connectable same-kind pair in id-scan order, for
/// inactivity hints. Returns the two tile ids.
pub fn find_pair(tiles: &[Tile], width: i32, height: i32) -> Option<(usize, usize)> {
    for (i, tile) in tiles.iter().enumerate() {
        if tile.matched {
            continue;
        }
        for other in &tiles[i + 1..] {
            if other.matched || tile.kind != other.kind {
                continue;
            }
            if connectable(tiles, tile, other, width, height) {
                return Some((tile.id, other.id));
            }
        }
    }
    None
}

fn connectable(tiles: &[Tile], a: &Tile, b: &Tile, width: i32, height: i32) -> bool {
    let obstacles = obstacles_between(tiles, a.id, b.id, width, height);
    connect(a.position, b.position, &obstacles, width, height).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(kinds: &[&[u32]]) -> Vec<Tile> {
        let mut tiles = vec![];
        for (y, row) in kinds.iter().enumerate() {
            for (x, &kind) in row.iter().enumerate() {
                if kind > 0 {
                    tiles.push(Tile::new(tiles.len(), kind, Cell::new(x as i32, y as i32)));
                }
            }
        }
        tiles
    }

    #[test]
    fn adjacent_pairs_are_solvable() {
        let tiles = board(&[&[1, 1], &[2, 2]]);
        assert!(has_full_pairing(&tiles, 2, 2));
        assert!(every_tile_has_partner(&tiles, 2, 2));
    }

    #[test]
    fn the_diagonal_deadlock_is_not_solvable() {
        // Same kinds on opposite diagonals of a full 2x2: every route out
        // of a corner is blocked by the other pair, including the rails
        // outside the grid.
        let tiles = board(&[&[1, 2], &[2, 1]]);
        assert!(!has_full_pairing(&tiles, 2, 2));
        assert!(!every_tile_has_partner(&tiles, 2, 2));
    }

    #[test]
    fn matched_tiles_neither_block_nor_need_partners() {
        let mut tiles = board(&[&[1, 2, 1], &[3, 2, 3]]);
        // The kind-2 column splits the board; matching it away frees the rest.
        assert!(every_tile_has_partner(&tiles, 3, 2));
        for tile in tiles.iter_mut().filter(|t| t.kind == 2) {
            tile.matched = true;
        }
        assert!(has_full_pairing(&tiles, 3, 2));
    }

    #[test]
    fn strict_is_stronger_than_loose() {
        // Four tiles of one kind in a row: each has a reachable partner,
        // and the greedy pairing also clears; both checkers agree here.
        let tiles = board(&[&[1, 1, 1, 1]]);
        assert!(every_tile_has_partner(&tiles, 4, 1));
        assert!(has_full_pairing(&tiles, 4, 1));

        // An odd kind-group separates them: every tile still has some
        // reachable partner, but no full pairing exists.
        let tiles = board(&[&[1, 1, 1, 2, 2]]);
        assert!(every_tile_has_partner(&tiles, 5, 1));
        assert!(!has_full_pairing(&tiles, 5, 1));
    }

    #[test]
    fn find_pair_returns_the_first_connectable_pair() {
        let tiles = board(&[&[1, 2], &[2, 1]]);
        assert_eq!(find_pair(&tiles, 2, 2), None);

        let tiles = board(&[&[1, 1], &[2, 2]]);
        assert_eq!(find_pair(&tiles, 2, 2), Some((0, 1)));
    }
}
