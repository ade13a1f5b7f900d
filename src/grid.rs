use thiserror::Error;

/// Errors reported when constructing a grid from input rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {actual} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Whether a cell is currently claimed by a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Free,
    Occupied,
}

/// A single letter cell on the board. Identity is the (x, y) coordinate pair;
/// the letter plays no part in equality.
#[derive(Debug, Clone)]
pub struct Cell {
    pub letter: char,
    pub x: usize,
    pub y: usize,
    state: CellState,
}

impl Cell {
    fn new(letter: char, x: usize, y: usize) -> Self {
        Self {
            letter,
            x,
            y,
            state: CellState::Free,
        }
    }

    pub fn is_free(&self) -> bool {
        self.state == CellState::Free
    }

    pub fn coord(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

/// The playing board: a fixed-size rectangle of letter cells.
///
/// The shape and letters are immutable after construction; only the per-cell
/// occupancy state changes, and only through `mark_occupied`/`mark_free`.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from equal-length rows of letters, top row first.
    /// Letters are lowercased. Fails on zero rows, an empty first row, or
    /// rows of differing length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let actual = row.chars().count();
            if actual != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, letter) in row.chars().enumerate() {
                cells.push(Cell::new(letter.to_lowercase().next().unwrap_or(letter), x, y));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked cell lookup. Signed coordinates so that adjacency
    /// probes just past the edges return `None` instead of needing
    /// special-casing by callers.
    pub fn cell_at(&self, x: isize, y: isize) -> Option<&Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(&self.cells[y * self.width + x])
    }

    /// The letter at an in-bounds coordinate.
    pub fn letter(&self, x: usize, y: usize) -> Option<char> {
        self.cell_at(x as isize, y as isize).map(|c| c.letter)
    }

    pub fn is_free(&self, x: usize, y: usize) -> bool {
        self.cell_at(x as isize, y as isize)
            .is_some_and(Cell::is_free)
    }

    /// Claim a cell for a tentatively placed word. In-bounds only.
    pub fn mark_occupied(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x].state = CellState::Occupied;
        }
    }

    /// Release a cell claimed by `mark_occupied`.
    pub fn mark_free(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x].state = CellState::Free;
        }
    }

    /// Termination test for the cover search.
    pub fn all_cells_occupied(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_free())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
