use itertools::Itertools;

use crate::lianliankan::prelude::*;

/// Scores a board in [0, 1] by the shapes of its currently-connectable
/// same-kind pairs: two-corner routes weigh 0.6, one-corner routes 0.3,
/// and scarcity of straight routes contributes the final 0.1. Fractions
/// are taken over connectable pairs only, and a board with none scores 0.
///
/// Higher means a layout that takes more turns to resolve, which is the
/// one the generator prefers. Pure function; nothing is mutated.
pub fn score(tiles: &[Tile], width: i32, height: i32) -> f64 {
    let mut connectable = 0usize;
    let mut by_corners = [0usize; 3];

    for (a, b) in tiles.iter().tuple_combinations() {
        if a.kind != b.kind {
            continue;
        }
        let obstacles = obstacles_between(tiles, a.id, b.id, width, height);
        if let Some(path) = connect(a.position, b.position, &obstacles, width, height) {
            connectable += 1;
            by_corners[path.corner_count()] += 1;
        }
    }

    if connectable == 0 {
        return 0.0;
    }

    let fraction = |n: usize| n as f64 / connectable as f64;
    TWO_CORNER_WEIGHT * fraction(by_corners[2])
        + ONE_CORNER_WEIGHT * fraction(by_corners[1])
        + STRAIGHT_WEIGHT * (1.0 - fraction(by_corners[0]))
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
    fn scoring_is_deterministic() {
        let tiles = board(&[&[1, 2, 1], &[2, 3, 3]]);
        assert_eq!(score(&tiles, 3, 2), score(&tiles, 3, 2));
    }

    #[test]
    fn turny_boards_outscore_straight_ones() {
        // Every pair adjacent on a row: all routes are straight.
        let straight = board(&[&[1, 1], &[2, 2]]);
        // Diagonal corners of an otherwise empty board: both kind-1 routes
        // need a corner or two.
        let turny = board(&[&[1, 0, 2], &[0, 0, 0], &[2, 0, 1]]);

        let lo = score(&straight, 2, 2);
        let hi = score(&turny, 3, 3);
        assert!(lo < hi, "expected {lo} < {hi}");
    }

    #[test]
    fn no_connectable_pairs_scores_zero() {
        assert_eq!(score(&[], 4, 4), 0.0);

        let deadlock = board(&[&[1, 2], &[2, 1]]);
        assert_eq!(score(&deadlock, 2, 2), 0.0);
    }

    #[test]
    fn all_straight_boards_score_the_floor() {
        let tiles = board(&[&[1, 1]]);
        let s = score(&tiles, 2, 1);
        assert!(s.abs() < 1e-9, "straight-only board scored {s}");
    }
}
