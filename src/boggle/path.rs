use std::sync::Arc;

/// Walk over the board as a persistent list of cell indices, newest cell first.
///
/// `Empty` is the start of every walk: no cell placed yet, so any cell may come next.
/// Extending never touches the original value, it shares it as the tail of the
/// new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    Empty,
    Step {
        cell: usize,
        len: usize,
        prev: Arc<Path>,
    },
}

impl Path {
    /// Returns a new path with `cell` appended
    pub fn extend(&self, cell: usize) -> Path {
        Path::Step {
            cell,
            len: self.len() + 1,
            prev: Arc::new(self.clone()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Path::Empty => 0,
            Path::Step { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Path::Empty)
    }

    /// Most recently placed cell
    pub fn last(&self) -> Option<usize> {
        match self {
            Path::Empty => None,
            Path::Step { cell, .. } => Some(*cell),
        }
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.iter_rev().any(|c| c == cell)
    }

    /// Cells from the newest back to the first one placed
    pub fn iter_rev(&self) -> IterPath<'_> {
        IterPath { curr: self }
    }

    /// Cells in the order they were placed
    pub fn cells(&self) -> Vec<usize> {
        let mut cells: Vec<usize> = self.iter_rev().collect();
        cells.reverse();
        cells
    }
}

pub struct IterPath<'a> {
    curr: &'a Path,
}

impl<'a> Iterator for IterPath<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self.curr {
            Path::Empty => None,
            Path::Step { cell, prev, .. } => {
                self.curr = prev.as_ref();
                Some(*cell)
            }
        }
    }
}
