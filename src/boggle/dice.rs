use rand::prelude::SliceRandom;
use rand::Rng;

use super::board::{BoggleBoard, Tile};
use super::{DEFAULT_SIDE, NUM_FACES};
use crate::errors::BoardError;

type Die = [&'static str; NUM_FACES];

static ITALIAN: [Die; 25] = [
    ["A", "Z", "F", "S", "Qu", "B"],
    ["G", "C", "S", "V", "P", "A"],
    ["H", "I", "S", "E", "R", "N"],
    ["A", "I", "O", "B", "M", "C"],
    ["T", "I", "V", "E", "N", "G"],
    ["M", "O", "V", "D", "I", "T"],
    ["V", "N", "D", "Z", "A", "E"],
    ["O", "A", "A", "I", "E", "T"],
    ["F", "R", "I", "P", "A", "G"],
    ["M", "L", "R", "C", "O", "I"],
    ["O", "N", "F", "E", "B", "L"],
    ["L", "O", "C", "I", "D", "M"],
    ["T", "B", "R", "L", "I", "A"],
    ["C", "F", "A", "R", "O", "I"],
    ["N", "U", "E", "O", "C", "T"],
    ["L", "E", "P", "U", "S", "T"],
    ["N", "O", "D", "E", "S", "T"],
    ["A", "I", "O", "S", "M", "R"],
    ["T", "G", "C", "A", "P", "I"],
    ["L", "A", "R", "E", "S", "C"],
    ["A", "B", "O", "O", "Qu", "M"],
    ["G", "U", "E", "O", "N", "L"],
    ["C", "D", "P", "M", "A", "E"],
    ["R", "O", "E", "L", "U", "I"],
    ["H", "I", "F", "E", "I", "E"],
];

static ENGLISH: [Die; 25] = [
    ["A", "A", "E", "E", "G", "N"],
    ["A", "B", "B", "J", "O", "O"],
    ["A", "C", "H", "O", "P", "S"],
    ["A", "F", "F", "K", "P", "S"],
    ["A", "O", "O", "W", "T", "T"],
    ["C", "I", "M", "O", "T", "U"],
    ["D", "E", "I", "L", "R", "X"],
    ["D", "E", "L", "R", "V", "Y"],
    ["D", "I", "S", "T", "T", "Y"],
    ["E", "E", "G", "H", "N", "W"],
    ["E", "E", "I", "N", "S", "V"],
    ["E", "H", "R", "T", "V", "W"],
    ["E", "I", "O", "S", "S", "T"],
    ["E", "L", "T", "T", "R", "Y"],
    ["H", "I", "M", "N", "Qu", "U"],
    ["H", "L", "N", "N", "R", "Z"],
    ["A", "A", "E", "E", "G", "N"],
    ["A", "C", "H", "O", "P", "S"],
    ["A", "F", "F", "K", "P", "S"],
    ["D", "E", "I", "L", "R", "X"],
    ["D", "E", "L", "R", "V", "Y"],
    ["E", "E", "G", "H", "N", "W"],
    ["E", "I", "O", "S", "S", "T"],
    ["H", "I", "M", "N", "Qu", "U"],
    ["H", "L", "N", "N", "R", "Z"],
];

static SPANISH: [Die; 25] = [
    ["A", "A", "A", "F", "R", "S"],
    ["A", "A", "D", "I", "R", "S"],
    ["A", "A", "E", "E", "E", "H"],
    ["A", "C", "E", "I", "L", "T"],
    ["A", "D", "E", "N", "N", "N"],
    ["A", "E", "E", "E", "E", "M"],
    ["A", "E", "E", "M", "O", "U"],
    ["A", "E", "G", "M", "N", "N"],
    ["A", "E", "I", "I", "T", "T"],
    ["A", "F", "I", "R", "S", "U"],
    ["B", "J", "L", "Qu", "X", "Z"],
    ["C", "C", "N", "Ñ", "S", "T"],
    ["C", "E", "I", "L", "P", "T"],
    ["C", "E", "I", "P", "S", "T"],
    ["C", "G", "O", "R", "R", "V"],
    ["D", "D", "L", "N", "O", "R"],
    ["D", "E", "H", "L", "O", "R"],
    ["D", "H", "H", "N", "O", "T"],
    ["D", "H", "L", "N", "O", "R"],
    ["E", "M", "O", "T", "T", "T"],
    ["E", "N", "S", "S", "S", "U"],
    ["F", "I", "P", "R", "S", "Y"],
    ["H", "I", "P", "R", "R", "Y"],
    ["N", "Ñ", "O", "O", "T", "U"],
    ["O", "O", "O", "T", "T", "U"],
];

/// Languages with a built-in set of dice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Language {
    Italian,
    English,
    Spanish,
}

impl Language {
    /// Locale tag of the dictionary matching this language
    pub fn locale(&self) -> &'static str {
        match self {
            Self::Italian => "it_IT",
            Self::English => "en_EN",
            Self::Spanish => "es_ES",
        }
    }

    pub fn dice(&self) -> DiceSet {
        let dice: &[Die] = match self {
            Self::Italian => &ITALIAN,
            Self::English => &ENGLISH,
            Self::Spanish => &SPANISH,
        };
        DiceSet::new(dice.iter().map(|d| d.to_vec()).collect())
    }
}

/// Pool of dice used to roll a board, one die per cell
#[derive(Debug, Clone)]
pub struct DiceSet {
    dice: Vec<Vec<&'static str>>,
}

impl DiceSet {
    pub fn new(dice: Vec<Vec<&'static str>>) -> Self {
        Self { dice }
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Shuffles the dice into the cells of a `side x side` board and rolls each one.
    /// The randomness comes entirely from `rng`, so a seeded generator gives the same board every time.
    pub fn roll<R: Rng + ?Sized>(&self, side: usize, rng: &mut R) -> Result<BoggleBoard, BoardError> {
        if self.dice.len() != side * side {
            return Err(BoardError::DiceCount {
                dice: self.dice.len(),
                side,
            });
        }

        let mut order = (0..self.dice.len()).collect::<Vec<_>>();
        order.shuffle(rng);

        let mut tiles = Vec::with_capacity(order.len());
        for (index, &die) in order.iter().enumerate() {
            let face = self.dice[die]
                .choose(rng)
                .ok_or(BoardError::EmptyTile { index })?;
            tiles.push(Tile::new(*face));
        }

        BoggleBoard::from_tiles(side, tiles)
    }

    /// Rolls the classic 5x5 board
    pub fn roll_default<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BoggleBoard, BoardError> {
        self.roll(DEFAULT_SIDE, rng)
    }
}
