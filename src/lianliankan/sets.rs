use crate::lianliankan::prelude::*;

type SubSet = u64;
const SUBSET_SIZE: usize = SubSet::BITS as usize;

/// A set of occupied board cells, stored as a flat bitset over the board
/// rectangle. Membership queries for cells outside the rectangle answer
/// `false`, which is exactly what the path search wants: the rails one
/// cell beyond the board edge are always unoccupied.
#[derive(Clone, Debug)]
pub struct CellSet {
    width: i32,
    height: i32,
    bits: Vec<SubSet>,
}

impl CellSet {
    /// Constructs an empty set over a width x height rectangle.
    pub fn new(width: i32, height: i32) -> CellSet {
        let cells = (width.max(0) as usize) * (height.max(0) as usize);
        CellSet {
            width,
            height,
            bits: vec![0; cells.div_ceil(SUBSET_SIZE)],
        }
    }

    #[inline]
    fn index(&self, cell: &Cell) -> Option<(usize, usize)> {
        if !cell.in_bounds(self.width, self.height) {
            return None;
        }
        let linear = (cell.y * self.width + cell.x) as usize;
        Some((linear / SUBSET_SIZE, linear % SUBSET_SIZE))
    }

    /// Whether the set holds the given cell. Out-of-bounds cells are never held.
    pub fn contains(&self, cell: &Cell) -> bool {
        match self.index(cell) {
            Some((ia, ib)) => (self.bits[ia] >> ib) & 1 == 1,
            None => false,
        }
    }

    /// Inserts a cell into the set; out-of-bounds cells are ignored.
    pub fn insert(&mut self, cell: &Cell) -> &mut Self {
        if let Some((ia, ib)) = self.index(cell) {
            self.bits[ia] |= (1 as SubSet) << ib;
        }
        self
    }

    /// Removes a cell from the set.
    pub fn remove(&mut self, cell: &Cell) -> &mut Self {
        if let Some((ia, ib)) = self.index(cell) {
            self.bits[ia] &= !((1 as SubSet) << ib);
        }
        self
    }

    /// The number of cells held.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|sub| sub.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&sub| sub == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::CellSet;
    use crate::lianliankan::coords::Cell;

    #[test]
    fn membership() {
        let mut s = CellSet::new(5, 3);
        s.insert(&Cell::new(4, 2)).insert(&Cell::new(0, 0));
        assert!(s.contains(&Cell::new(4, 2)));
        assert!(s.contains(&Cell::new(0, 0)));
        assert_eq!(s.len(), 2);

        s.remove(&Cell::new(0, 0));
        assert!(!s.contains(&Cell::new(0, 0)));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn out_of_bounds_is_never_occupied() {
        let mut s = CellSet::new(4, 4);
        s.insert(&Cell::new(-1, 0)).insert(&Cell::new(0, 4));
        assert!(s.is_empty());
        assert!(!s.contains(&Cell::new(-1, 0)));
        assert!(!s.contains(&Cell::new(4, 0)));
        assert!(!s.contains(&Cell::new(0, -1)));
        assert!(!s.contains(&Cell::new(0, 4)));
    }
}
