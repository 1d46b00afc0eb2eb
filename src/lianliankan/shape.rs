use crate::lianliankan::prelude::*;

/// A grid-producing function for non-rectangular levels. Pure in `(width,
/// height)`; a failure here is recovered by falling back to the full
/// rectangle, never surfaced to the caller.
pub type ShapeFn = fn(i32, i32) -> Result<Vec<Vec<bool>>>;

/// The playable-shape input for a level: either a literal boolean grid
/// (rows indexed `[y][x]`, `true` = playable) or a function of the board
/// dimensions. Kept as a tagged union so call sites never have to sniff
/// what they were handed.
#[derive(Clone, Debug)]
pub enum ShapeMask {
    Literal(Vec<Vec<bool>>),
    Generator(ShapeFn),
}

impl ShapeMask {
    /// Resolves the mask against concrete board dimensions.
    ///
    /// The supplied grid is overlaid onto an all-playable rectangle and
    /// clipped to it, so undersized or oversized grids are both fine.
    /// A generator that errors resolves to the full rectangle.
    pub fn resolve(&self, width: i32, height: i32) -> Mask {
        let grid = match self {
            ShapeMask::Literal(grid) => Some(grid.clone()),
            ShapeMask::Generator(f) => match f(width, height) {
                Ok(grid) => Some(grid),
                Err(e) => {
                    log::warn!("shape generator failed ({e}); using the full rectangle");
                    None
                }
            },
        };

        let mut mask = Mask::full(width, height);
        if let Some(grid) = grid {
            for (dst_row, src_row) in mask.rows.iter_mut().zip(&grid) {
                for (dst, &playable) in dst_row.iter_mut().zip(src_row) {
                    *dst = playable;
                }
            }
        }
        mask
    }
}

/// A resolved width x height boolean grid of playable cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: i32,
    pub height: i32,
    rows: Vec<Vec<bool>>,
}

impl Mask {
    /// The all-playable rectangle. Non-positive dimensions yield an empty mask.
    pub fn full(width: i32, height: i32) -> Mask {
        let [w, h] = [width.max(0) as usize, height.max(0) as usize];
        Mask {
            width,
            height,
            rows: vec![vec![true; w]; h],
        }
    }

    /// Whether the given cell is playable. Out-of-bounds cells are not.
    pub fn playable(&self, cell: &Cell) -> bool {
        cell.in_bounds(self.width, self.height) && self.rows[cell.y as usize][cell.x as usize]
    }

    /// All playable cells in row-major order.
    pub fn playable_cells(&self) -> Vec<Cell> {
        let mut cells = vec![];
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = Cell::new(x, y);
                if self.playable(&cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken(_: i32, _: i32) -> Result<Vec<Vec<bool>>> {
        Err(anyhow!("no grid for you"))
    }

    fn ring(width: i32, height: i32) -> Result<Vec<Vec<bool>>> {
        let grid = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| x == 0 || y == 0 || x == width - 1 || y == height - 1)
                    .collect()
            })
            .collect();
        Ok(grid)
    }

    #[test]
    fn default_is_the_full_rectangle() {
        let mask = Mask::full(3, 2);
        assert_eq!(mask.playable_cells().len(), 6);
        assert!(!mask.playable(&Cell::new(3, 0)));
        assert!(!mask.playable(&Cell::new(0, -1)));
    }

    #[test]
    fn literal_overlay_clips_to_the_board() {
        // 1x1 grid over a 2x2 board: the three uncovered cells stay playable.
        let mask = ShapeMask::Literal(vec![vec![false]]).resolve(2, 2);
        assert!(!mask.playable(&Cell::new(0, 0)));
        assert_eq!(mask.playable_cells().len(), 3);

        // Oversized rows are ignored past the board edge.
        let mask = ShapeMask::Literal(vec![vec![false; 10]; 10]).resolve(2, 2);
        assert!(mask.playable_cells().is_empty());
    }

    #[test]
    fn generator_masks_resolve() {
        let mask = ShapeMask::Generator(ring).resolve(4, 4);
        assert_eq!(mask.playable_cells().len(), 12);
        assert!(!mask.playable(&Cell::new(1, 1)));
    }

    #[test]
    fn failing_generator_falls_back_to_the_full_rectangle() {
        let mask = ShapeMask::Generator(broken).resolve(4, 4);
        assert_eq!(mask, Mask::full(4, 4));
    }

    #[test]
    fn degenerate_dimensions_yield_an_empty_mask() {
        assert!(Mask::full(0, 5).playable_cells().is_empty());
        assert!(Mask::full(-3, 5).playable_cells().is_empty());
    }
}
