// Library interface for fillword-solver
// This allows integration tests to access internal modules

pub mod cli;
pub mod grid;
pub mod lexicon;
pub mod logging;
pub mod path;
pub mod search;
pub mod solver;

// Re-export commonly used items for easier testing
pub use grid::{Cell, CellState, Grid, GridError};
pub use lexicon::Lexicon;
pub use path::{FoundWord, Reading, WordPath};
pub use search::{SeenPaths, find_all_words, find_words_from, sort_longest_first};
pub use solver::find_cover;
