pub mod boggle;
pub mod errors;
pub mod log;

pub use boggle::board::{BoggleBoard, Tile};
pub use boggle::dice::{DiceSet, Language};
pub use boggle::dictionary::{DictionaryOracle, FstDictionary};
pub use boggle::path::Path;
pub use boggle::search::{PathSearcher, SearchConfig};
