use std::collections::HashSet;
use std::rc::Rc;

use crate::grid::Grid;

/// Orthogonal neighbor offsets: left, right, up, down.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Which reading of a path matched the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Forward,
    Reverse,
}

/// A candidate path under exploration: an ordered chain of distinct,
/// orthogonally adjacent cell coordinates plus the working lexicon that is
/// still consistent with its letters.
///
/// The working lexicon is shared with the parent path until a prune narrows
/// it, at which point the path gets its own smaller set.
#[derive(Debug, Clone)]
pub struct WordPath {
    cells: Vec<(usize, usize)>,
    lexicon: Rc<HashSet<String>>,
}

impl WordPath {
    /// The length-1 path at a starting cell.
    pub fn seed(x: usize, y: usize, lexicon: Rc<HashSet<String>>) -> Self {
        Self {
            cells: vec![(x, y)],
            lexicon,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn lexicon_is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// The path's letters read first-to-last.
    pub fn word(&self, grid: &Grid) -> String {
        self.cells
            .iter()
            .filter_map(|&(x, y)| grid.letter(x, y))
            .collect()
    }

    fn reversed(word: &str) -> String {
        word.chars().rev().collect()
    }

    /// Narrow the working lexicon to entries that still contain the path's
    /// letters as a contiguous substring in either reading direction. This is
    /// deliberately a containment prune, not a prefix prune: letters may be
    /// added at both ends of a path.
    pub fn prune(&mut self, grid: &Grid) {
        let forward = self.word(grid);
        let reverse = Self::reversed(&forward);
        let narrowed: HashSet<String> = self
            .lexicon
            .iter()
            .filter(|entry| entry.contains(&forward) || entry.contains(&reverse))
            .cloned()
            .collect();
        self.lexicon = Rc::new(narrowed);
    }

    /// Exact-match test against the working lexicon, forward reading first.
    pub fn matched_reading(&self, grid: &Grid) -> Option<Reading> {
        let forward = self.word(grid);
        if self.lexicon.contains(&forward) {
            return Some(Reading::Forward);
        }
        if self.lexicon.contains(&Self::reversed(&forward)) {
            return Some(Reading::Reverse);
        }
        None
    }

    /// Flip the cell order so a reverse-matched path reads its word
    /// left-to-right.
    pub fn reverse_cells(&mut self) {
        self.cells.reverse();
    }

    /// All one-cell extensions of this path at either end: the neighbor must
    /// be in bounds, free, and not already part of the chain. Sequences (or
    /// their mirrors) already in `seen` are skipped; accepted sequences are
    /// registered immediately.
    pub fn expansions(&self, grid: &Grid, seen: &mut crate::search::SeenPaths) -> Vec<WordPath> {
        let mut new_paths = Vec::new();
        for at_front in [true, false] {
            let (cx, cy) = if at_front {
                self.cells[0]
            } else {
                self.cells[self.cells.len() - 1]
            };
            for (dx, dy) in DIRECTIONS {
                let Some(cell) = grid.cell_at(cx as isize + dx, cy as isize + dy) else {
                    continue;
                };
                if !cell.is_free() || self.cells.contains(&cell.coord()) {
                    continue;
                }
                let mut cells = Vec::with_capacity(self.cells.len() + 1);
                if at_front {
                    cells.push(cell.coord());
                    cells.extend_from_slice(&self.cells);
                } else {
                    cells.extend_from_slice(&self.cells);
                    cells.push(cell.coord());
                }
                if seen.insert_if_new(&cells) {
                    new_paths.push(WordPath {
                        cells,
                        lexicon: Rc::clone(&self.lexicon),
                    });
                }
            }
        }
        new_paths
    }

    /// Freeze a matched path into its public result form. The cell order must
    /// already be canonical (reading the word left-to-right).
    pub fn into_found(self, grid: &Grid) -> FoundWord {
        let word = self.word(grid);
        FoundWord {
            word,
            cells: self.cells,
        }
    }
}

/// A dictionary word discovered on the board, with the coordinates that spell
/// it left-to-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub cells: Vec<(usize, usize)>,
}

impl FoundWord {
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if every cell of this word is still unclaimed.
    pub fn is_free(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&(x, y)| grid.is_free(x, y))
    }
}
