use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path as FsPath;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::path::Path;
use super::util::Position;
use crate::errors::BoardError;

/// Face of a die sitting in one cell. Usually one letter, but some faces
/// (e.g. "Qu") spell more than one. Stored on disk as the bare face string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Tile {
    face: String,
    folded: String,
}

impl Tile {
    pub fn new(face: impl Into<String>) -> Self {
        let face = face.into();
        let folded = face.to_lowercase();
        Self { face, folded }
    }

    /// The face as printed on the die
    pub fn face(&self) -> &str {
        &self.face
    }

    /// Lowercase form used when spelling words
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl From<&str> for Tile {
    fn from(face: &str) -> Self {
        Tile::new(face)
    }
}

impl From<String> for Tile {
    fn from(face: String) -> Self {
        Tile::new(face)
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.face
    }
}

impl AsRef<str> for Tile {
    fn as_ref(&self) -> &str {
        &self.face
    }
}

/// Square grid of tiles. Cells are addressed by their row-major index.
#[derive(Debug, Clone)]
pub struct BoggleBoard {
    side: usize,
    cells: Array2<Tile>,
}

impl BoggleBoard {
    /// Builds a board of the given side from `side * side` tiles in row-major order
    pub fn from_tiles(side: usize, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if side == 0 {
            return Err(BoardError::EmptyLayout);
        }
        if let Some(index) = tiles.iter().position(|t| t.face.is_empty()) {
            return Err(BoardError::EmptyTile { index });
        }
        let cells = Array2::from_shape_vec((side, side), tiles)?;
        Ok(Self { side, cells })
    }

    /// Builds a board from its rows, e.g. `[["B", "C"], ["A", "Qu"]]`
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, BoardError> {
        let side = rows.len();
        if side == 0 {
            return Err(BoardError::EmptyLayout);
        }
        // Every row must be checked before reserving side * side tiles
        if let Some((row, faces)) = rows.iter().enumerate().find(|(_, f)| f.len() != side) {
            return Err(BoardError::NotSquare {
                row,
                found: faces.len(),
                expected: side,
            });
        }
        let tiles = rows
            .iter()
            .flat_map(|faces| faces.iter().map(|f| Tile::new(f.as_ref())))
            .collect::<Vec<_>>();
        Self::from_tiles(side, tiles)
    }

    /// Reads a board layout stored as a JSON array of rows
    pub fn from_file<P: AsRef<FsPath>>(path: P) -> Result<Self, BoardError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let rows: Vec<Vec<Tile>> = serde_json::from_reader(reader)?;
        Self::from_rows(&rows)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells on the board
    pub fn num_cells(&self) -> usize {
        self.side * self.side
    }

    /// Row/col of a cell. Panics if the index is off the board.
    pub fn position(&self, index: usize) -> Position {
        assert!(
            index < self.num_cells(),
            "cell index {} out of range for a {}x{} board",
            index,
            self.side,
            self.side
        );
        Position::from_index(index, self.side)
    }

    pub fn tile_at(&self, index: usize) -> &Tile {
        &self[self.position(index)]
    }

    /// True when `a` and `b` are distinct cells touching horizontally, vertically or diagonally.
    /// Panics if either index is off the board.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.position(a).touches(&self.position(b))
    }

    /// Indices of every cell touching `index`
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        self.position(index)
            .adjacent(self.side)
            .into_iter()
            .map(|p| p.as_index(self.side))
            .collect()
    }

    /// Indices of every cell whose tile is exactly `letter`, ignoring case
    pub fn positions_of(&self, letter: &str) -> Vec<usize> {
        let letter = letter.to_lowercase();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| t.folded == letter)
            .map(|(i, _)| i)
            .collect()
    }

    /// The lowercase string spelled by a path, or `None` for a path with no cells
    pub fn spell(&self, path: &Path) -> Option<String> {
        if path.is_empty() {
            return None;
        }
        Some(
            path.cells()
                .into_iter()
                .map(|i| self.tile_at(i).folded())
                .collect(),
        )
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter()
    }

    /// The layout as rows of tiles, the same shape `from_rows` and `from_file` accept
    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.cells.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}

impl std::ops::Index<Position> for BoggleBoard {
    type Output = Tile;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[[index.row, index.col]]
    }
}

impl fmt::Display for BoggleBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let border = "+---".repeat(self.side) + "+";
        for row in self.cells.rows() {
            writeln!(f, "{}", border)?;
            for tile in row.iter() {
                // Two letter faces fill the padding
                if tile.face.chars().count() > 1 {
                    write!(f, "| {}", tile.face)?;
                } else {
                    write!(f, "| {} ", tile.face)?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> BoggleBoard {
        BoggleBoard::from_rows(&[
            vec!["A", "B", "C"],
            vec!["D", "Qu", "F"],
            vec!["G", "H", "I"],
        ])
        .unwrap()
    }

    #[test]
    fn test_tile_lookup() {
        let board = small_board();
        assert_eq!(board.num_cells(), 9);
        assert_eq!(board.tile_at(0).face(), "A");
        assert_eq!(board.tile_at(4).face(), "Qu");
        assert_eq!(board.tile_at(4).folded(), "qu");
        assert_eq!(board.tile_at(8).face(), "I");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_tile_lookup_out_of_range() {
        small_board().tile_at(9);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_adjacency_out_of_range() {
        small_board().is_adjacent(0, 42);
    }

    #[test]
    fn test_adjacency() {
        let board = small_board();
        assert!(board.is_adjacent(0, 1));
        assert!(board.is_adjacent(0, 4));
        assert!(board.is_adjacent(2, 4));
        assert!(!board.is_adjacent(0, 2));
        assert!(!board.is_adjacent(2, 3));
        assert!(!board.is_adjacent(4, 4));
        for a in 0..9 {
            for b in 0..9 {
                assert_eq!(board.is_adjacent(a, b), board.is_adjacent(b, a));
            }
            for n in board.neighbors(a) {
                assert!(board.is_adjacent(a, n));
            }
        }
    }

    #[test]
    fn test_positions_of() {
        let board = BoggleBoard::from_rows(&[vec!["A", "b"], vec!["B", "C"]]).unwrap();
        assert_eq!(board.positions_of("b"), vec![1, 2]);
        assert_eq!(board.positions_of("B"), vec![1, 2]);
        assert!(board.positions_of("z").is_empty());
    }

    #[test]
    fn test_spell() {
        let board = small_board();
        assert_eq!(board.spell(&Path::Empty), None);
        let path = Path::Empty.extend(0).extend(4).extend(8);
        assert_eq!(board.spell(&path).as_deref(), Some("aqui"));
    }

    #[test]
    fn test_rejects_bad_layouts() {
        let empty: Vec<Vec<&str>> = vec![];
        assert!(matches!(
            BoggleBoard::from_rows(&empty),
            Err(BoardError::EmptyLayout)
        ));
        assert!(matches!(
            BoggleBoard::from_rows(&[vec!["A", "B"], vec!["C"]]),
            Err(BoardError::NotSquare { row: 1, .. })
        ));
        assert!(matches!(
            BoggleBoard::from_rows(&vec![vec!["A"]; 100_000]),
            Err(BoardError::NotSquare {
                row: 0,
                found: 1,
                expected: 100_000
            })
        ));
        assert!(matches!(
            BoggleBoard::from_rows(&[vec!["A", ""], vec!["C", "D"]]),
            Err(BoardError::EmptyTile { index: 1 })
        ));
        assert!(matches!(
            BoggleBoard::from_tiles(2, vec![Tile::new("A")]),
            Err(BoardError::Shape(_))
        ));
    }

    #[test]
    fn test_layout_json() {
        let board = BoggleBoard::from_rows(&[vec!["A", "Qu"], vec!["C", "D"]]).unwrap();
        let json = serde_json::to_string(&board.rows()).unwrap();
        assert_eq!(json, r#"[["A","Qu"],["C","D"]]"#);

        let rows: Vec<Vec<Tile>> = serde_json::from_str(&json).unwrap();
        let again = BoggleBoard::from_rows(&rows).unwrap();
        assert_eq!(again.tile_at(1).folded(), "qu");
    }

    #[test]
    fn test_display() {
        let board = BoggleBoard::from_rows(&[vec!["A", "Qu"], vec!["C", "D"]]).unwrap();
        let expected = "+---+---+\n| A | Qu|\n+---+---+\n| C | D |\n+---+---+";
        assert_eq!(board.to_string(), expected);
    }
}
