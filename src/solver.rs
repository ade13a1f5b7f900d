use crate::debug_log;
use crate::grid::Grid;
use crate::path::FoundWord;

/// Search for an ordered subset of `candidates` whose cells are pairwise
/// disjoint and jointly cover every grid cell.
///
/// First-fit backtracking over the list in its given order; callers pass the
/// candidates sorted longest-first so large, board-filling words are tried
/// early. Returns `None` when no exact cover exists — a normal outcome, not
/// an error. The grid's occupancy is left exactly as it was on entry whether
/// or not a cover is found; displaying a cover is the caller's job.
pub fn find_cover(grid: &mut Grid, candidates: &[FoundWord]) -> Option<Vec<FoundWord>> {
    if grid.all_cells_occupied() {
        return Some(Vec::new());
    }

    for (i, word) in candidates.iter().enumerate() {
        occupy(grid, word);

        // Only candidates later in the list that fit the remaining free
        // cells survive into the recursive branch.
        let remaining: Vec<FoundWord> = candidates[i + 1..]
            .iter()
            .filter(|other| other.is_free(grid))
            .cloned()
            .collect();

        match find_cover(grid, &remaining) {
            Some(rest) => {
                let mut cover = Vec::with_capacity(rest.len() + 1);
                cover.push(word.clone());
                cover.extend(rest);
                release(grid, word);
                return Some(cover);
            }
            None => {
                debug_log!("backtracking off '{}'", word.word);
                release(grid, word);
            }
        }
    }

    None
}

fn occupy(grid: &mut Grid, word: &FoundWord) {
    for &(x, y) in &word.cells {
        grid.mark_occupied(x, y);
    }
}

fn release(grid: &mut Grid, word: &FoundWord) {
    for &(x, y) in &word.cells {
        grid.mark_free(x, y);
    }
}
