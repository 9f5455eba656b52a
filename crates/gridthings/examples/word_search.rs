//! Find every occurrence of a word in a letter grid, in all eight directions
//!
//! Run with `cargo run --example word_search -p gridthings`.

use gridthings::prelude::*;

const PUZZLE: &str = "
    GRIDX
    OTHRS
    TAIXO
    XDDNG
    GRIDS
";

fn main() -> gridthings::Result<()> {
    let grid = GridBuilder::<String>::new().from_text(PUZZLE, &TextOptions::default())?;
    println!("{}", grid);

    let word = "GRID";
    let length = word.chars().count();
    let mut found = 0;

    for cell in grid.iter() {
        let (row, col) = (cell.row() as isize, cell.col() as isize);
        for direction in Direction::ALL {
            let line = grid.line_toward(row, col, direction, length);
            if line.extends_out_of_bounds() {
                continue;
            }
            let candidate: String = line.values().into_iter().map(String::as_str).collect();
            if candidate == word {
                found += 1;
                println!("{} at ({}, {}) going {:?}", word, row, col, direction);
            }
        }
    }

    println!("{} occurrence(s)", found);
    Ok(())
}
