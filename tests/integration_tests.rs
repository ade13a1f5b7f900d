// Integration tests for the fillword-solver application
// These tests verify that all modules work together correctly

use std::collections::HashSet;
use std::io::Cursor;

use fillword_solver::cli::interactive_loop;
use fillword_solver::*;

#[test]
fn test_end_to_end_sweep_and_cover() {
    // Three horizontal words tile the whole board.
    let grid = Grid::from_rows(&["cat", "dog", "rat"]).unwrap();
    let lexicon = Lexicon::load_from_str("cat\ndog\nrat\ntar\ngod\n");

    let mut words = find_all_words(&grid, &lexicon);
    sort_longest_first(&mut words);
    assert!(!words.is_empty());

    let mut grid = grid;
    let cover = find_cover(&mut grid, &words).expect("board should be coverable");

    // The cover partitions the grid: every cell in exactly one word.
    let mut seen_cells = HashSet::new();
    for word in &cover {
        for &cell in &word.cells {
            assert!(seen_cells.insert(cell), "cell {cell:?} covered twice");
        }
    }
    assert_eq!(seen_cells.len(), 9);
}

#[test]
fn test_removing_required_word_breaks_cover() {
    let grid = Grid::from_rows(&["cat", "dog", "rat"]).unwrap();

    // Without "dog" the middle row can never be covered.
    let lexicon = Lexicon::load_from_str("cat\nrat\ntar\n");
    let mut words = find_all_words(&grid, &lexicon);
    sort_longest_first(&mut words);

    let mut grid = grid;
    assert!(find_cover(&mut grid, &words).is_none());
}

#[test]
fn test_discovered_words_read_from_lexicon() {
    let grid = Grid::from_rows(&["cat", "abo", "rpd"]).unwrap();
    let lexicon = Lexicon::from_words(["cat", "tab", "dpr"]);

    let words = find_all_words(&grid, &lexicon);
    for found in &words {
        // The canonical cell order spells a lexicon member left-to-right.
        let spelled: String = found
            .cells
            .iter()
            .filter_map(|&(x, y)| grid.letter(x, y))
            .collect();
        assert_eq!(spelled, found.word);
        assert!(lexicon.contains(&found.word));
    }
    let names: HashSet<&str> = words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(names, HashSet::from(["cat", "tab", "dpr"]));
}

#[test]
fn test_embedded_dictionary_demo_board() {
    // The bundled word list covers this board with one word per row.
    let rows = ["lion", "wolf", "bear", "deer"];
    let mut grid = Grid::from_rows(&rows).unwrap();
    let lexicon = Lexicon::load_from_str(lexicon::EMBEDDED_DICTIONARY);

    let mut words = find_all_words(&grid, &lexicon);
    sort_longest_first(&mut words);
    let cover = find_cover(&mut grid, &words).expect("demo board should be coverable");

    let covered: usize = cover.iter().map(|w| w.cells.len()).sum();
    assert_eq!(covered, 16);
}

#[test]
fn test_empty_lexicon_full_pipeline() {
    let mut grid = Grid::from_rows(&["ab", "cd"]).unwrap();
    let lexicon = Lexicon::default();
    let words = find_all_words(&grid, &lexicon);
    assert!(words.is_empty());
    assert!(find_cover(&mut grid, &words).is_none());
}

#[test]
fn test_interactive_session_covers_board() {
    let mut grid = Grid::from_rows(&["cat", "dog", "rat"]).unwrap();
    let lexicon = Lexicon::from_words(["cat", "dog", "rat"]);

    // Accept the proposal for each of the three start cells.
    let mut reader = Cursor::new("y\ny\ny\n");
    interactive_loop(&mut grid, &lexicon, &mut reader, false);
    assert!(grid.all_cells_occupied());
}

#[test]
fn test_interactive_session_reject_and_redirect() {
    let mut grid = Grid::from_rows(&["cat", "dog", "rat"]).unwrap();
    let lexicon = Lexicon::from_words(["cat", "dog", "rat"]);

    // Reject "cat", redirect to (0, 1), accept "dog", then stop.
    let mut reader = Cursor::new("n\n0 1\ny\n");
    interactive_loop(&mut grid, &lexicon, &mut reader, false);
    assert!(!grid.is_free(0, 1));
    assert!(grid.is_free(0, 0));
}
