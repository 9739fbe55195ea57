use super::grid::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step away from `cell` in this direction.  There is
    /// no wraparound or clamping to the playing field.
    pub(crate) fn step(self, cell: Cell) -> Cell {
        let Cell { mut row, mut col } = cell;
        match self {
            Direction::Up => row = row.saturating_sub(1),
            Direction::Down => row = row.saturating_add(1),
            Direction::Left => col = col.saturating_sub(1),
            Direction::Right => col = col.saturating_add(1),
        }
        Cell { row, col }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
