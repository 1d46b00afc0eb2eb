use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::lianliankan::{complexity, prelude::*, solvability};

/// The outcome of board generation.
///
/// `Validated` boards passed the strict full-pairing check; `BestEffort`
/// boards came out of the fallback strategy and carry their complexity
/// score, and are not guaranteed solvable. Callers that only want tiles
/// can use [`Generated::into_tiles`].
#[derive(Clone, Debug)]
pub enum Generated {
    Validated(Vec<Tile>),
    BestEffort { tiles: Vec<Tile>, complexity: f64 },
}

impl Generated {
    pub fn tiles(&self) -> &[Tile] {
        match self {
            Generated::Validated(tiles) => tiles,
            Generated::BestEffort { tiles, .. } => tiles,
        }
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        match self {
            Generated::Validated(tiles) => tiles,
            Generated::BestEffort { tiles, .. } => tiles,
        }
    }
}

/// Generates a full board for the given dimensions and kind count.
///
/// The primary strategy places a shuffled multiset of kinds one tile at a
/// time under an anti-clustering constraint and accepts the first
/// placement that passes the strict solvability check. If its attempt
/// budget runs out, a simpler shuffle-and-validate fallback takes over,
/// and as a last resort an arbitrary pairing is returned rather than
/// failing the call.
///
/// Degenerate inputs (non-positive dimensions, masks with fewer than two
/// playable cells) yield an empty board, not an error. An odd playable
/// count drops the last row-major cell to stay pairable.
pub fn generate(width: i32, height: i32, kinds: u32, shape: Option<&ShapeMask>) -> Generated {
    let mask = match shape {
        Some(shape) => shape.resolve(width, height),
        None => Mask::full(width, height),
    };
    let kinds = kinds.max(1);

    let mut playable = mask.playable_cells();
    if playable.len() % 2 != 0 {
        playable.pop();
    }
    if playable.len() < 2 {
        log::warn!("mask leaves {} playable cell(s); returning an empty board", playable.len());
        return Generated::Validated(vec![]);
    }

    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        if let Some(mut tiles) = try_constrained_placement(&playable, kinds, width, height) {
            if solvability::has_full_pairing(&tiles, width, height) {
                reshuffle_within_kinds(&mut tiles);
                log::info!("generated a valid board in {attempt} attempt(s)");
                return Generated::Validated(tiles);
            }
        }
    }

    log::warn!("constrained placement budget exhausted; falling back to simple layout");
    fallback(&playable, kinds, width, height)
}

/// The kind multiset for a board of `pairs` pairs: kinds assigned
/// cyclically 1..=kinds, each appearing twice per pair it owns.
fn kind_multiset(pairs: usize, kinds: u32) -> Vec<u32> {
    (0..pairs)
        .map(|i| (i as u32 % kinds) + 1)
        .flat_map(|kind| [kind, kind])
        .collect()
}

/// One attempt of the primary strategy: walk a shuffled kind multiset and
/// drop each kind into the first remaining cell where fewer than
/// `CLUSTER_LIMIT` of the 8 surrounding cells already hold that kind.
/// Returns `None` when some kind has no admissible cell left.
fn try_constrained_placement(playable: &[Cell], kinds: u32, width: i32, height: i32) -> Option<Vec<Tile>> {
    let mut order = kind_multiset(playable.len() / 2, kinds);
    order.shuffle(&mut thread_rng());

    let mut tiles: Vec<Tile> = Vec::with_capacity(playable.len());
    let mut open: Vec<Cell> = playable.to_vec();

    for (id, kind) in order.into_iter().enumerate() {
        let slot = open
            .iter()
            .position(|cell| !too_clustered(&tiles, cell, kind, width, height))?;
        tiles.push(Tile::new(id, kind, open.remove(slot)));
    }
    Some(tiles)
}

/// Whether placing `kind` at `cell` would sit next to `CLUSTER_LIMIT` or
/// more already-placed tiles of the same kind.
fn too_clustered(tiles: &[Tile], cell: &Cell, kind: u32, width: i32, height: i32) -> bool {
    let same_kind_neighbours = ADJACENT_OFFSETS
        .iter()
        .map(|offset| cell + offset)
        .filter(|n| n.in_bounds(width, height))
        .filter(|n| tiles.iter().any(|t| t.position == *n && t.kind == kind))
        .count();
    same_kind_neighbours >= CLUSTER_LIMIT
}

/// Re-randomizes which cell each same-kind tile occupies among the cells
/// already assigned to that kind, preserving the kind-to-cell multiset.
fn reshuffle_within_kinds(tiles: &mut [Tile]) {
    let mut rng = thread_rng();
    let mut by_kind: HashMap<u32, Vec<usize>> = HashMap::new();
    for (i, tile) in tiles.iter().enumerate() {
        by_kind.entry(tile.kind).or_default().push(i);
    }

    for group in by_kind.values() {
        let mut cells: Vec<Cell> = group.iter().map(|&i| tiles[i].position).collect();
        cells.shuffle(&mut rng);
        for (&i, cell) in group.iter().zip(cells) {
            tiles[i].position = cell;
        }
    }
}

/// The fallback strategy: pair shuffled kinds with shuffled cells
/// positionally, keep the loose-solvable candidate with the highest
/// complexity, and stop early once one clears [`TARGET_COMPLEXITY`].
/// If nothing validates within budget, an arbitrary pairing is returned;
/// an unsolvable board beats no board.
fn fallback(playable: &[Cell], kinds: u32, width: i32, height: i32) -> Generated {
    let mut rng = thread_rng();
    let order = kind_multiset(playable.len() / 2, kinds);

    let mut best: Option<(Vec<Tile>, f64)> = None;

    for _ in 0..MAX_FALLBACK_ATTEMPTS {
        let tiles = random_pairing(playable, &order, &mut rng);

        if solvability::every_tile_has_partner(&tiles, width, height) {
            let complexity = complexity::score(&tiles, width, height);
            if complexity >= TARGET_COMPLEXITY {
                return Generated::BestEffort { tiles, complexity };
            }
            if best.as_ref().is_none_or(|(_, c)| complexity > *c) {
                best = Some((tiles, complexity));
            }
        }
    }

    if let Some((tiles, complexity)) = best {
        return Generated::BestEffort { tiles, complexity };
    }

    log::warn!("no fallback candidate validated; returning an arbitrary pairing");
    let tiles = random_pairing(playable, &order, &mut rng);
    let complexity = complexity::score(&tiles, width, height);
    Generated::BestEffort { tiles, complexity }
}

fn random_pairing(playable: &[Cell], order: &[u32], rng: &mut impl rand::Rng) -> Vec<Tile> {
    let mut cells = playable.to_vec();
    let mut order = order.to_vec();
    cells.shuffle(rng);
    order.shuffle(rng);

    cells
        .into_iter()
        .zip(order)
        .enumerate()
        .map(|(id, (cell, kind))| Tile::new(id, kind, cell))
        .collect()
}
