use rand::Rng;
use std::num::NonZeroU16;

/// A position on the playing field.  Row 0 is the top row and column 0 is
/// the leftmost column.
///
/// Coordinates are signed because nothing stops the snake from leaving the
/// field.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) row: i32,
    pub(crate) col: i32,
}

impl Cell {
    pub(crate) const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }
}

/// The dimensions of the playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) rows: NonZeroU16,
    pub(crate) cols: NonZeroU16,
}

impl Grid {
    pub(crate) fn new(rows: NonZeroU16, cols: NonZeroU16) -> Grid {
        Grid { rows, cols }
    }

    /// Test whether `cell` lies on the playing field
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..i32::from(self.rows.get())).contains(&cell.row)
            && (0..i32::from(self.cols.get())).contains(&cell.col)
    }

    /// Return the cell at the middle of the field
    pub(crate) fn center(self) -> Cell {
        Cell::new(
            i32::from(self.rows.get() / 2),
            i32::from(self.cols.get() / 2),
        )
    }

    /// Pick a cell uniformly at random from the whole field.  Whatever is
    /// already on the cell is not taken into account.
    pub(crate) fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        Cell::new(
            i32::from(rng.random_range(0..self.rows.get())),
            i32::from(rng.random_range(0..self.cols.get())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    fn grid(rows: u16, cols: u16) -> Grid {
        Grid::new(
            NonZeroU16::new(rows).expect("rows should be nonzero"),
            NonZeroU16::new(cols).expect("cols should be nonzero"),
        )
    }

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(49, 79), true)]
    #[case(Cell::new(13, 15), true)]
    #[case(Cell::new(50, 0), false)]
    #[case(Cell::new(0, 80), false)]
    #[case(Cell::new(-1, 5), false)]
    #[case(Cell::new(5, -1), false)]
    fn test_contains(#[case] cell: Cell, #[case] inside: bool) {
        assert_eq!(grid(50, 80).contains(cell), inside);
    }

    #[test]
    fn center() {
        assert_eq!(grid(50, 80).center(), Cell::new(25, 40));
        assert_eq!(grid(1, 1).center(), Cell::new(0, 0));
    }

    #[test]
    fn random_cells_stay_on_grid() {
        let g = grid(3, 4);
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let cell = g.random_cell(&mut rng);
            assert!(g.contains(cell), "{cell:?} is off the grid");
            seen.insert(cell);
        }
        assert_eq!(seen.len(), 12);
    }
}
