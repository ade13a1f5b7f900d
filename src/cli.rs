use clap::Parser;
use crossterm::style::{Color, Stylize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::grid::Grid;
use crate::info_log;
use crate::lexicon::Lexicon;
use crate::path::FoundWord;
use crate::search::{SeenPaths, find_words_from, sort_longest_first};

/// Fillword Solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a file with the board rows, one row of letters per line
    #[arg(short = 'g', long = "grid")]
    pub grid_path: Option<String>,

    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dict")]
    pub dict_path: Option<String>,

    /// Propose words one at a time for manual accept/reject
    #[arg(long)]
    pub interactive: bool,

    /// Print the discovered words and skip the cover search
    #[arg(long)]
    pub words_only: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Rotating palette for placed words.
pub const WORD_COLORS: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

pub fn word_color(index: usize) -> Color {
    WORD_COLORS[index % WORD_COLORS.len()]
}

/// Driver-side cell coloring. Occupancy in the core never carries
/// presentation state, so the colors live out here.
#[derive(Debug, Default)]
pub struct ColorMap {
    colors: HashMap<(usize, usize), Color>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paint(&mut self, word: &FoundWord, color: Color) {
        for &cell in &word.cells {
            self.colors.insert(cell, color);
        }
    }

    pub fn clear(&mut self, word: &FoundWord) {
        for cell in &word.cells {
            self.colors.remove(cell);
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.colors.get(&(x, y)).copied()
    }
}

pub fn display_grid(grid: &Grid, colors: &ColorMap, use_color: bool) {
    for y in 0..grid.height() {
        let mut line = String::new();
        for x in 0..grid.width() {
            let Some(letter) = grid.letter(x, y) else {
                continue;
            };
            let upper: String = letter.to_uppercase().collect();
            match colors.get(x, y) {
                Some(color) if use_color => {
                    line.push_str(&format!("{} ", upper.with(color)));
                }
                _ => {
                    line.push_str(&upper);
                    line.push(' ');
                }
            }
        }
        println!("{}", line.trim_end());
    }
}

pub fn display_words(words: &[FoundWord]) {
    println!("Total words: {}", words.len());
    let list: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
    println!("{}", list.join(", "));
}

/// Print the cover word list, one color per word, and return the color
/// assignments so the caller can render the board the same way.
pub fn display_cover(cover: &[FoundWord], use_color: bool) -> ColorMap {
    let mut colors = ColorMap::new();
    for (i, word) in cover.iter().enumerate() {
        let color = word_color(i);
        colors.paint(word, color);
        if use_color {
            println!("{}", word.word.as_str().with(color));
        } else {
            println!("{}", word.word);
        }
    }
    colors
}

/// Read board rows from a file, skipping blank lines.
pub fn load_grid_rows<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut rows = Vec::new();
    for line in reader.lines() {
        let row = line?.trim().to_string();
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Read board rows interactively until a blank line or end of input.
pub fn read_grid_rows<R: BufRead>(reader: &mut R) -> Vec<String> {
    let mut rows = Vec::new();
    loop {
        let Some(row) = read_trimmed_line(reader) else {
            break;
        };
        if row.is_empty() {
            break;
        }
        rows.push(row);
    }
    rows
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn parse_coords(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// The top-left-most free cell that has not already failed to produce a
/// word, scanning rows top to bottom.
fn top_left_free_cell(grid: &Grid, failed: &[(usize, usize)]) -> Option<(usize, usize)> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.is_free(x, y) && !failed.contains(&(x, y)) {
                return Some((x, y));
            }
        }
    }
    None
}

/// Manual solving mode: propose words for one start cell at a time, longest
/// first, and let the user accept or reject each. Accepted words claim their
/// cells and keep their color. When every candidate for a cell is rejected
/// the user may name the next start cell; invalid input ends the session.
pub fn interactive_loop<R: BufRead>(grid: &mut Grid, lexicon: &Lexicon, reader: &mut R, use_color: bool) {
    let mut colors = ColorMap::new();
    let mut failed: Vec<(usize, usize)> = Vec::new();
    let mut accepted = 0usize;
    let mut next_start: Option<(usize, usize)> = None;

    loop {
        let Some((x, y)) = next_start.take().or_else(|| top_left_free_cell(grid, &failed))
        else {
            break;
        };

        let mut words = find_words_from(grid, lexicon, x, y, &mut SeenPaths::new());
        sort_longest_first(&mut words);
        println!("\nStart cell: ({x}, {y})");

        if words.is_empty() {
            println!("No matching words.");
            failed.push((x, y));
            continue;
        }

        let mut chose = false;
        for word in &words {
            colors.paint(word, word_color(accepted));
            display_grid(grid, &colors, use_color);
            println!("Keep the word '{}'? (y/n):", word.word);
            let Some(answer) = read_trimmed_line(reader) else {
                return;
            };
            if answer.eq_ignore_ascii_case("y") {
                for &(cx, cy) in &word.cells {
                    grid.mark_occupied(cx, cy);
                }
                info_log!("accepted '{}' at ({x}, {y})", word.word);
                accepted += 1;
                chose = true;
                break;
            }
            colors.clear(word);
        }

        if !chose {
            println!("No word accepted for this cell.");
            println!("Enter coordinates of a free cell (x y):");
            let Some(input) = read_trimmed_line(reader) else {
                return;
            };
            match parse_coords(&input) {
                Some((nx, ny)) if grid.is_free(nx, ny) => next_start = Some((nx, ny)),
                _ => break,
            }
        }
    }

    println!("\nPuzzle finished!");
    display_grid(grid, &colors, use_color);
}
