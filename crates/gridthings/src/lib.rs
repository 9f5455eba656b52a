//! # gridthings
//!
//! Two-dimensional data addressed by `(row, col)`, with the navigation
//! primitives that are awkward to express with plain indexing: neighbour
//! lookup that tolerates the grid's edges, straight-line rays in any
//! direction, and row and column extraction.
//!
//! ## Features
//!
//! - Build grids from column maps, records, rows, delimited text or CSV
//! - Peek at neighbours without bounds checks; edges yield sentinel cells
//! - Collect lines, neighbourhoods, rows and columns as [`Collection`]s
//! - Order and aggregate collections by cell value
//! - Walk a grid with a caller-owned [`Cursor`]
//!
//! ## Example
//!
//! ```rust
//! use gridthings::prelude::*;
//!
//! let grid = GridBuilder::<String>::new()
//!     .from_text("abc\ndef\nxyz", &TextOptions::default())
//!     .unwrap();
//!
//! assert_eq!(grid.shape(), (3, 3));
//! assert_eq!(grid.peek_all(1, 1, 1).len(), 8);
//!
//! let word: String = grid
//!     .line_toward(0, 0, Direction::DownRight, 3)
//!     .values()
//!     .into_iter()
//!     .map(String::as_str)
//!     .collect();
//! assert_eq!(word, "aez");
//! ```

pub mod prelude;

// Re-export core types
pub use gridthings_core::{
    // Cell types
    Cell,
    CellRef,
    Collection,
    Cursor,
    Direction,
    // Error types
    Error,
    // Main types
    Grid,
    GridBuilder,
    InRange,
    IntGrid,
    NonEmpty,
    Numeric,
    OutOfBoundsCell,
    Result,
    TextGrid,
    TextOptions,
    Validator,
    Value,
    ValueGrid,
};

// Re-export I/O types
pub use gridthings_csv::{CsvError, CsvReadOptions, CsvReader, CsvResult};

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Extension trait for Grid to add file input
pub trait GridExt: Sized {
    /// Open a grid from a file
    ///
    /// `.csv` files go through [`CsvReader`] with default options; anything
    /// else is read as delimited text with default [`TextOptions`].
    fn open<P: AsRef<Path>>(path: P) -> CsvResult<Self>;
}

impl<T> GridExt for Grid<T>
where
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    fn open<P: AsRef<Path>>(path: P) -> CsvResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") => {
                let file = fs::File::open(path)?;
                CsvReader::read_with(file, &CsvReadOptions::default(), GridBuilder::new())
            }
            _ => {
                let text = fs::read_to_string(path)?;
                let grid = GridBuilder::new().from_text(&text, &TextOptions::default())?;
                Ok(grid)
            }
        }
    }
}
