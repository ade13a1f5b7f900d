use std::cmp::Reverse;
use std::collections::HashSet;

use crate::debug_log;
use crate::grid::Grid;
use crate::lexicon::{Lexicon, MIN_WORD_LEN};
use crate::path::{FoundWord, Reading, WordPath};

/// Registry of coordinate sequences already explored during one sweep. A
/// sequence and its reversal count as the same entry, so a physical chain of
/// cells is derived at most once no matter which end or starting cell reaches
/// it first.
#[derive(Debug, Default)]
pub struct SeenPaths {
    paths: HashSet<Vec<(usize, usize)>>,
}

impl SeenPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Register a sequence unless it, or its mirror, is already present.
    /// Returns true if the sequence was new.
    pub fn insert_if_new(&mut self, cells: &[(usize, usize)]) -> bool {
        if self.paths.contains(cells) {
            return false;
        }
        let mirror: Vec<(usize, usize)> = cells.iter().rev().copied().collect();
        if self.paths.contains(mirror.as_slice()) {
            return false;
        }
        self.paths.insert(cells.to_vec());
        true
    }
}

/// Depth-first search for every lexicon word whose path starts or ends at
/// cells reachable from (x, y).
///
/// The stack is LIFO: the most recently derived path is explored next.
/// Working lexicons are pruned by substring containment once a path is at
/// least `MIN_WORD_LEN` letters long; shorter paths inherit their parent's
/// working set untouched.
pub fn find_words_from(
    grid: &Grid,
    lexicon: &Lexicon,
    x: usize,
    y: usize,
    seen: &mut SeenPaths,
) -> Vec<FoundWord> {
    let mut found = Vec::new();
    // Starting cells must exist and be unclaimed; partially covered boards
    // are searched only from their free cells.
    let seed_is_free = grid
        .cell_at(x as isize, y as isize)
        .is_some_and(|cell| cell.is_free());
    if !seed_is_free {
        return found;
    }

    let mut stack = vec![WordPath::seed(x, y, lexicon.snapshot())];
    while let Some(mut path) = stack.pop() {
        if path.len() >= MIN_WORD_LEN {
            path.prune(grid);
        }
        if path.lexicon_is_empty() {
            // Dead end: no dictionary entry contains these letters.
            continue;
        }

        let matched = path.matched_reading(grid);
        if matched == Some(Reading::Reverse) {
            path.reverse_cells();
        }

        stack.extend(path.expansions(grid, seen));

        if matched.is_some() {
            found.push(path.into_found(grid));
        }
    }
    found
}

/// Full-board sweep: search once from every cell in column-major order with a
/// single shared registry, so geometrically identical paths are validated at
/// most once across all starting cells.
pub fn find_all_words(grid: &Grid, lexicon: &Lexicon) -> Vec<FoundWord> {
    let mut seen = SeenPaths::new();
    let mut found = Vec::new();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let words = find_words_from(grid, lexicon, x, y, &mut seen);
            debug_log!("start ({x}, {y}): {} words", words.len());
            found.extend(words);
        }
    }
    debug_log!(
        "sweep complete: {} words, {} paths explored",
        found.len(),
        seen.len()
    );
    found
}

/// Stable longest-first ordering; ties keep discovery order, which the cover
/// search relies on for determinism.
pub fn sort_longest_first(words: &mut [FoundWord]) {
    words.sort_by_key(|word| Reverse(word.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> Grid {
        Grid::from_rows(&["cat", "abo", "rpd"]).unwrap()
    }

    #[test]
    fn test_finds_forward_word_from_start() {
        let grid = grid_3x3();
        let lexicon = Lexicon::from_words(["cat"]);
        let mut seen = SeenPaths::new();
        let found = find_words_from(&grid, &lexicon, 0, 0, &mut seen);
        assert!(
            found
                .iter()
                .any(|w| w.word == "cat" && w.cells == [(0, 0), (1, 0), (2, 0)])
        );
    }

    #[test]
    fn test_reverse_match_canonicalizes_cells() {
        let grid = grid_3x3();
        let lexicon = Lexicon::from_words(["dpr"]);
        let mut seen = SeenPaths::new();
        let found = find_words_from(&grid, &lexicon, 2, 2, &mut seen);
        let word = found.iter().find(|w| w.word == "dpr").unwrap();
        // Cells are recorded so the word reads left-to-right.
        assert_eq!(word.cells, vec![(2, 2), (1, 2), (0, 2)]);
    }

    #[test]
    fn test_bent_path_word() {
        let grid = grid_3x3();
        let lexicon = Lexicon::from_words(["tab"]);
        let found = find_all_words(&grid, &lexicon);
        let word = found.iter().find(|w| w.word == "tab").unwrap();
        assert_eq!(word.cells, vec![(2, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_sweep_scenario() {
        let grid = grid_3x3();
        let lexicon = Lexicon::from_words(["cat", "tab", "dpr"]);
        let found = find_all_words(&grid, &lexicon);
        let words: Vec<&str> = found.iter().map(|w| w.word.as_str()).collect();
        assert!(words.contains(&"cat"));
        assert!(words.contains(&"tab"));
        assert!(words.contains(&"dpr"));
    }

    #[test]
    fn test_no_duplicate_sequences_in_sweep() {
        let grid = grid_3x3();
        let lexicon = Lexicon::from_words(["cat", "tab", "dpr", "bat", "tac"]);
        let found = find_all_words(&grid, &lexicon);
        for (i, a) in found.iter().enumerate() {
            for b in &found[i + 1..] {
                let mirror: Vec<_> = b.cells.iter().rev().copied().collect();
                assert!(a.cells != b.cells && a.cells != mirror);
            }
        }
    }

    #[test]
    fn test_paths_are_chained_and_distinct() {
        let grid = Grid::from_rows(&["toad", "ratd", "bone"]).unwrap();
        let lexicon = Lexicon::load_from_str(crate::lexicon::EMBEDDED_DICTIONARY);
        let found = find_all_words(&grid, &lexicon);
        assert!(!found.is_empty());
        for word in &found {
            for pair in word.cells.windows(2) {
                let (ax, ay) = pair[0];
                let (bx, by) = pair[1];
                let dist = ax.abs_diff(bx) + ay.abs_diff(by);
                assert_eq!(dist, 1, "cells of {} not orthogonally chained", word.word);
            }
            let unique: HashSet<_> = word.cells.iter().collect();
            assert_eq!(unique.len(), word.cells.len());
        }
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let grid = grid_3x3();
        let lexicon = Lexicon::from_words(["cat", "tab", "dpr"]);
        let first = find_all_words(&grid, &lexicon);
        let second = find_all_words(&grid, &lexicon);
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_cell_grid_yields_nothing() {
        let grid = Grid::from_rows(&["a"]).unwrap();
        let lexicon = Lexicon::from_words(["ace", "cat"]);
        assert!(find_all_words(&grid, &lexicon).is_empty());
    }

    #[test]
    fn test_empty_lexicon_yields_nothing() {
        let grid = grid_3x3();
        let lexicon = Lexicon::default();
        assert!(find_all_words(&grid, &lexicon).is_empty());
    }

    #[test]
    fn test_occupied_cells_not_entered() {
        let mut grid = grid_3x3();
        grid.mark_occupied(2, 0);
        let lexicon = Lexicon::from_words(["cat"]);
        let found = find_all_words(&grid, &lexicon);
        assert!(found.iter().all(|w| w.word != "cat"));
    }

    #[test]
    fn test_sort_longest_first_stable() {
        let mut words = vec![
            FoundWord {
                word: "cat".into(),
                cells: vec![],
            },
            FoundWord {
                word: "horse".into(),
                cells: vec![],
            },
            FoundWord {
                word: "tab".into(),
                cells: vec![],
            },
        ];
        sort_longest_first(&mut words);
        assert_eq!(words[0].word, "horse");
        assert_eq!(words[1].word, "cat");
        assert_eq!(words[2].word, "tab");
    }
}
