use std::collections::HashSet;

use log::{debug, info, trace};
use rayon::prelude::*;

use super::board::BoggleBoard;
use super::dictionary::DictionaryOracle;
use super::path::Path;
use super::MIN_WORD_LEN;
use crate::errors::SearchError;

/*
    Both searches grow paths one cell at a time in lock-step: every path of the
    current generation is tried against every candidate cell, and a filter decides
    which extensions survive into the next generation and which ones are results.

    Word discovery keeps a path while the dictionary still knows a word starting
    with what it spells. Path lookup keeps a path while it spells a prefix of the
    target word.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Shortest word reported by word discovery
    pub min_word_len: usize,
    /// Double check dictionary hits against the completions of the word minus its last letter
    pub strict_confirmation: bool,
    /// Expand the candidate cells of a generation on the rayon pool
    pub parallel: bool,
    /// Path lookup matches one letter of the word per cell, so multi-letter faces such as "Qu"
    /// never take part. Off by default: a "Qu" cell then matches both letters at once.
    pub letter_by_letter: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_word_len: MIN_WORD_LEN,
            strict_confirmation: true,
            parallel: true,
            letter_by_letter: false,
        }
    }
}

/// What the filter decided about one freshly extended path
struct Visit<T> {
    /// Carry the path into the next generation
    keep: bool,
    /// Something worth reporting
    found: Option<T>,
}

/// Paths surviving one round of expansion and everything found along the way
struct Generation<T> {
    paths: Vec<Path>,
    found: Vec<T>,
}

impl<T> Default for Generation<T> {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            found: Vec::new(),
        }
    }
}

impl<T> Generation<T> {
    fn merge(&mut self, other: Generation<T>) {
        self.paths.extend(other.paths);
        self.found.extend(other.found);
    }
}

pub struct PathSearcher<'a, D> {
    board: &'a BoggleBoard,
    dict: &'a D,
    config: SearchConfig,
}

impl<'a, D: DictionaryOracle + Sync> PathSearcher<'a, D> {
    pub fn new(board: &'a BoggleBoard, dict: &'a D) -> Self {
        Self::with_config(board, dict, SearchConfig::default())
    }

    pub fn with_config(board: &'a BoggleBoard, dict: &'a D, config: SearchConfig) -> Self {
        Self {
            board,
            dict,
            config,
        }
    }

    /// A cell can extend a path if it is not on the path yet and touches the last cell.
    /// Any cell can start a path.
    pub fn can_extend(&self, path: &Path, cell: usize) -> bool {
        if path.contains(cell) {
            return false;
        }
        match path.last() {
            None => true,
            Some(last) => self.board.is_adjacent(cell, last),
        }
    }

    /// Checks a word against the dictionary. With strict confirmation, a word longer than
    /// two letters must also show up among the completions of the word minus its last letter.
    pub fn is_real_word(&self, word: &str) -> Result<bool, SearchError> {
        if !self.dict.is_real_word(word)? {
            return Ok(false);
        }
        if !self.config.strict_confirmation {
            return Ok(true);
        }

        let len = word.chars().count();
        if len <= 2 {
            return Ok(true);
        }
        let stem = word.chars().take(len - 1).collect::<String>();
        let confirmed = self
            .dict
            .words_with_prefix(&stem)?
            .iter()
            .filter(|w| w.chars().count() == len)
            .any(|w| w == word);
        Ok(confirmed)
    }

    /// Finds every dictionary word that can be traced on the board.
    /// The result is unordered; sort it for presentation.
    pub fn find_all_words(&self) -> Result<HashSet<String>, SearchError> {
        let cells = (0..self.board.num_cells()).collect::<Vec<_>>();
        let mut words = HashSet::new();
        let mut frontier = vec![Path::Empty];
        let mut depth = 0;

        loop {
            let generation = self.expand(&frontier, &cells, |_, spelled| {
                let found = if spelled.chars().count() >= self.config.min_word_len
                    && self.is_real_word(&spelled)?
                {
                    trace!("found {}", spelled);
                    Some(spelled.clone())
                } else {
                    None
                };
                // Nothing in the dictionary starts like this, so no extension can ever be a word
                let keep = self.dict.has_words_with_prefix(&spelled)?;
                Ok(Visit { keep, found })
            })?;
            depth += 1;
            self.check_depth(depth, &generation)?;

            debug!(
                "generation {}: {} paths kept, {} words found",
                depth,
                generation.paths.len(),
                generation.found.len()
            );
            words.extend(generation.found);

            if generation.paths.is_empty() {
                break;
            }
            frontier = generation.paths;
        }

        info!("found {} words in {} generations", words.len(), depth);
        Ok(words)
    }

    /// Finds every path spelling `word`, compared case-insensitively. Each path is the list
    /// of cell indices in order. A word that cannot be traced gives no paths.
    pub fn find_paths(&self, word: &str) -> Result<Vec<Vec<usize>>, SearchError> {
        let target = word.to_lowercase();
        if target.is_empty() {
            return Ok(Vec::new());
        }

        // Only cells whose face appears somewhere in the word can take part
        let cells = (0..self.board.num_cells())
            .filter(|&i| {
                let face = self.board.tile_at(i).folded();
                target.contains(face)
                    && !(self.config.letter_by_letter && face.chars().count() != 1)
            })
            .collect::<Vec<_>>();

        let mut paths = Vec::new();
        let mut frontier = vec![Path::Empty];
        let mut depth = 0;

        while !frontier.is_empty() {
            let generation = self.expand(&frontier, &cells, |path, spelled| {
                if spelled == target {
                    Ok(Visit {
                        keep: false,
                        found: Some(path.cells()),
                    })
                } else {
                    Ok(Visit {
                        keep: target.starts_with(&spelled),
                        found: None,
                    })
                }
            })?;
            depth += 1;
            self.check_depth(depth, &generation)?;

            paths.extend(generation.found);
            frontier = generation.paths;
        }

        paths.sort_unstable();
        debug!("{} paths spell {:?}", paths.len(), target);
        Ok(paths)
    }

    /// Tries every candidate cell against every path of the frontier. Each cell is
    /// handled on its own with local buffers which are merged once all cells are done.
    fn expand<T, F>(
        &self,
        frontier: &[Path],
        candidates: &[usize],
        visit: F,
    ) -> Result<Generation<T>, SearchError>
    where
        T: Send,
        F: Fn(&Path, String) -> Result<Visit<T>, SearchError> + Sync,
    {
        let expand_cell = |&cell: &usize| -> Result<Generation<T>, SearchError> {
            let mut local = Generation::default();
            for path in frontier {
                if !self.can_extend(path, cell) {
                    continue;
                }
                let next = path.extend(cell);
                let spelled = match self.board.spell(&next) {
                    Some(s) => s,
                    None => continue,
                };
                let Visit { keep, found } = visit(&next, spelled)?;
                if let Some(found) = found {
                    local.found.push(found);
                }
                if keep {
                    local.paths.push(next);
                }
            }
            Ok(local)
        };

        let parts: Vec<Generation<T>> = if self.config.parallel {
            candidates
                .par_iter()
                .map(expand_cell)
                .collect::<Result<_, _>>()?
        } else {
            candidates
                .iter()
                .map(expand_cell)
                .collect::<Result<_, _>>()?
        };

        let mut merged = Generation::default();
        for part in parts {
            merged.merge(part);
        }
        Ok(merged)
    }

    /// No path can be longer than the board has cells
    fn check_depth<T>(&self, depth: usize, generation: &Generation<T>) -> Result<(), SearchError> {
        let cells = self.board.num_cells();
        if depth > cells && !(generation.paths.is_empty() && generation.found.is_empty()) {
            return Err(SearchError::PathTooLong { len: depth, cells });
        }
        Ok(())
    }
}
