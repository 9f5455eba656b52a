//! CSV reader

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use gridthings_core::{Grid, GridBuilder, Value};

/// CSV reader producing grids
///
/// Records become rows and fields become columns, both numbered from 0.
/// Records of different lengths are accepted and give an irregular grid.
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid of text fields
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid<String>> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV into a grid of text fields
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid<String>> {
        Self::read_with(reader, options, GridBuilder::new())
    }

    /// Read CSV into a grid of type-detected values
    pub fn read_values<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid<Value>> {
        Self::read_with(reader, options, GridBuilder::new())
    }

    /// Read CSV with a configured builder, parsing every field as `T`
    ///
    /// The builder's fill and validator apply as for any other input.
    pub fn read_with<R, T>(
        reader: R,
        options: &CsvReadOptions,
        builder: GridBuilder<T>,
    ) -> CsvResult<Grid<T>>
    where
        R: Read,
        T: FromStr,
        T::Err: fmt::Display,
    {
        let trim = if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .trim(trim)
            .from_reader(reader);

        if options.has_header {
            let headers = csv_reader.headers()?;
            log::debug!("Skipping CSV header with {} fields", headers.len());
        }

        let records = csv_reader
            .records()
            .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;
        log::debug!("Read {} CSV records", records.len());

        let grid = builder.from_fields(records.iter().map(|record| record.iter()))?;
        Ok(grid)
    }
}
