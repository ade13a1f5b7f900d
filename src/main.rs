use fillword_solver::cli::{self, parse_cli};
use fillword_solver::grid::Grid;
use fillword_solver::lexicon::{EMBEDDED_DICTIONARY, Lexicon};
use fillword_solver::search::{find_all_words, sort_longest_first};
use fillword_solver::solver::find_cover;
use std::io;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let lexicon = match &cli.dict_path {
        Some(path) => match Lexicon::load_from_file(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                eprintln!("Failed to load dictionary from '{path}': {e}");
                Lexicon::default()
            }
        },
        None => Lexicon::load_from_str(EMBEDDED_DICTIONARY),
    };
    println!("Loaded {} words.", lexicon.len());

    let rows = match &cli.grid_path {
        Some(path) => match cli::load_grid_rows(path) {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("Failed to read grid from '{path}': {e}");
                return;
            }
        },
        None => {
            println!("Enter grid rows (blank line to finish):");
            cli::read_grid_rows(&mut io::stdin().lock())
        }
    };

    let mut grid = match Grid::from_rows(&rows) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Invalid grid: {e}");
            return;
        }
    };

    let use_color = !cli.no_color;
    println!("\nBoard:");
    cli::display_grid(&grid, &cli::ColorMap::new(), use_color);

    if cli.interactive {
        cli::interactive_loop(&mut grid, &lexicon, &mut io::stdin().lock(), use_color);
        return;
    }

    let mut words = find_all_words(&grid, &lexicon);
    sort_longest_first(&mut words);
    println!();
    cli::display_words(&words);

    if cli.words_only {
        return;
    }
    if words.is_empty() {
        println!("No words found on the board; nothing to cover it with.");
        return;
    }

    match find_cover(&mut grid, &words) {
        Some(cover) => {
            println!("\nThe board is covered by:");
            let colors = cli::display_cover(&cover, use_color);
            println!("\nSolution:");
            cli::display_grid(&grid, &colors, use_color);
        }
        None => {
            println!("\nThe board cannot be fully covered by the discovered words.");
        }
    }
}
