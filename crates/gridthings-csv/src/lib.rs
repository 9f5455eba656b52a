//! # gridthings-csv
//!
//! CSV reader for gridthings.
//!
//! ```rust
//! use gridthings_csv::{CsvReadOptions, CsvReader};
//!
//! let data = "name,score\nada,3\ngrace,5\n";
//! let grid = CsvReader::read_values(data.as_bytes(), &CsvReadOptions::with_header()).unwrap();
//!
//! assert_eq!(grid.shape(), (2, 2));
//! assert_eq!(grid.get_column(1).sum().unwrap(), 8.0);
//! ```

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
