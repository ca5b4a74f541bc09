use std::slice::Iter;

/// The eight ways to step from one cell to a touching one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 8] = [
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
        ];
        DIRS.iter()
    }

    /// Row and column offsets of a single step
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Converts a row-major index on a board of the given side back to row/col
    pub fn from_index(index: usize, side: usize) -> Position {
        Position {
            row: index / side,
            col: index % side,
        }
    }

    /// Converts the row/col to a 1d index
    pub fn as_index(&self, side: usize) -> usize {
        self.row * side + self.col
    }

    /// Returns the neighbouring position in the given direction, if it is still on the board
    pub fn step(&self, dir: Direction, side: usize) -> Option<Position> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < side && col < side {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Returns all the valid adjacent positions to this position, diagonals included
    pub fn adjacent(&self, side: usize) -> Vec<Position> {
        Direction::iter()
            .filter_map(|&d| self.step(d, side))
            .collect()
    }

    /// Two distinct cells touch when they are at most one row and one column apart
    pub fn touches(&self, other: &Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversion() {
        let side = 5;
        for i in 0..side * side {
            let pos = Position::from_index(i, side);
            assert!(pos.row < side && pos.col < side);
            assert_eq!(pos.as_index(side), i);
        }
        assert_eq!(Position::from_index(7, 5), Position { row: 1, col: 2 });
    }

    #[test]
    fn test_adjacent_clipped_at_edges() {
        let side = 5;
        assert_eq!(Position { row: 0, col: 0 }.adjacent(side).len(), 3);
        assert_eq!(Position { row: 0, col: 2 }.adjacent(side).len(), 5);
        assert_eq!(Position { row: 4, col: 4 }.adjacent(side).len(), 3);
        assert_eq!(Position { row: 2, col: 2 }.adjacent(side).len(), 8);
    }

    #[test]
    fn test_touches() {
        let a = Position { row: 1, col: 1 };
        assert!(!a.touches(&a));
        assert!(a.touches(&Position { row: 0, col: 0 }));
        assert!(a.touches(&Position { row: 2, col: 1 }));
        assert!(!a.touches(&Position { row: 3, col: 1 }));
        assert!(!a.touches(&Position { row: 1, col: 3 }));
    }
}
