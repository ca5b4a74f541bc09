//! Error types for board construction, dictionary access and path search.
//!
//! Out-of-range cell indices are not represented here: they are contract
//! violations and panic at the call site.

use std::io;

/// Failures while building a board from a layout, a file or a set of dice.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board layout has no rows")]
    EmptyLayout,

    #[error("board layout is not square: row {row} has {found} tiles, expected {expected}")]
    NotSquare {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("tile at cell {index} is empty")]
    EmptyTile { index: usize },

    #[error("{dice} dice cannot fill a {side}x{side} board")]
    DiceCount { dice: usize, side: usize },

    #[error("failed to read board layout: {0}")]
    Io(#[from] io::Error),

    #[error("invalid board layout: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid board shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Failures of the dictionary oracle. These are never turned into a
/// "not a word" answer by the search.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),

    #[error("failed to build dictionary: {0}")]
    Fst(#[from] fst::Error),

    #[error("dictionary unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("dictionary query failed: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("path of length {len} exceeds the {cells} cells of the board")]
    PathTooLong { len: usize, cells: usize },
}
