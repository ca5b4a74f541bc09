// 5x5 board, 6 faces per die
pub mod board;
pub mod dice;
pub mod dictionary;
pub mod path;
pub mod search;
pub mod util;

/// Side length of the classic board
pub const DEFAULT_SIDE: usize = 5;
/// Faces on each die
pub const NUM_FACES: usize = 6;
/// Shortest string that counts as a word
pub const MIN_WORD_LEN: usize = 3;
