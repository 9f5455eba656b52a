//! Grid construction
//!
//! [`GridBuilder`] ingests one of several input shapes and produces an
//! immutable [`Grid`]:
//!
//! 1. column-major maps, `col → (row → value)`, e.g. a dataframe's dict export
//! 2. records, one `col → value` map per row
//! 3. plain rows of values
//! 4. delimited text (see [`TextOptions`])
//!
//! ## Example
//!
//! ```rust
//! use gridthings_core::{GridBuilder, TextOptions};
//!
//! let grid = GridBuilder::<String>::new()
//!     .out_of_bounds_fill("#".to_string())
//!     .from_text("a,b,c\nd,e,f", &TextOptions::with_sep(","))
//!     .unwrap();
//!
//! assert_eq!(grid.shape(), (2, 3));
//! assert_eq!(grid.peek_left(0, 0, 1).value(), "#");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::grid::{Grid, Rows};
use crate::text::{self, TextOptions};
use crate::validation::Validator;

/// Builder for [`Grid`]
pub struct GridBuilder<T> {
    out_of_bounds_fill: T,
    validator: Option<Box<dyn Validator<T>>>,
}

impl<T: Default> GridBuilder<T> {
    /// Create a builder whose out-of-bounds fill is `T::default()`
    pub fn new() -> Self {
        Self::with_fill(T::default())
    }
}

impl<T: Default> Default for GridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridBuilder<T> {
    /// Create a builder with an explicit out-of-bounds fill
    pub fn with_fill(out_of_bounds_fill: T) -> Self {
        Self {
            out_of_bounds_fill,
            validator: None,
        }
    }

    /// Set the value carried by out-of-bounds sentinels
    pub fn out_of_bounds_fill(mut self, fill: T) -> Self {
        self.out_of_bounds_fill = fill;
        self
    }

    /// Check every value with `validator` while building
    pub fn validator<V>(mut self, validator: V) -> Self
    where
        V: Validator<T> + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Build from column-major data: `col → (row → value)`
    ///
    /// The axes are swapped on the way in; the grid is always stored by row.
    pub fn from_columns<C, R>(self, columns: C) -> Result<Grid<T>>
    where
        C: IntoIterator<Item = (usize, R)>,
        R: IntoIterator<Item = (usize, T)>,
    {
        let mut rows = Rows::new();
        for (col, column) in columns {
            for (row, value) in column {
                self.insert(&mut rows, row, col, value)?;
            }
        }
        Ok(self.finish(rows))
    }

    /// Build from records: one `col → value` map per row
    pub fn from_records<R, I>(self, records: R) -> Result<Grid<T>>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut rows = Rows::new();
        for (row, record) in records.into_iter().enumerate() {
            rows.entry(row).or_default();
            for (col, value) in record {
                self.insert(&mut rows, row, col, value)?;
            }
        }
        Ok(self.finish(rows))
    }

    /// Build from rows of values, numbering columns from 0
    pub fn from_rows<R, I>(self, source: R) -> Result<Grid<T>>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        self.from_records(source.into_iter().map(|r| r.into_iter().enumerate()))
    }

    /// Build from rows of text fields, parsing each with [`FromStr`]
    ///
    /// A field that fails to parse is reported as [`Error::Validation`].
    pub fn from_fields<R, I, S>(self, source: R) -> Result<Grid<T>>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: FromStr,
        T::Err: fmt::Display,
    {
        let mut rows = Rows::new();
        for (row, fields) in source.into_iter().enumerate() {
            rows.entry(row).or_default();
            for (col, field) in fields.into_iter().enumerate() {
                let field = field.as_ref();
                let value = field.parse::<T>().map_err(|e| {
                    Error::validation(row, col, format!("cannot parse {:?}: {}", field, e))
                })?;
                self.insert(&mut rows, row, col, value)?;
            }
        }
        Ok(self.finish(rows))
    }

    /// Build from delimited text
    pub fn from_text(self, text: &str, options: &TextOptions) -> Result<Grid<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let rows = text::split_fields(text, options)?;
        self.from_fields(rows)
    }

    fn insert(&self, rows: &mut Rows<T>, row: usize, col: usize, value: T) -> Result<()> {
        if let Some(validator) = &self.validator {
            validator
                .validate(&value)
                .map_err(|message| Error::validation(row, col, message))?;
        }
        rows.entry(row)
            .or_insert_with(BTreeMap::new)
            .insert(col, Cell::new(row, col, value));
        Ok(())
    }

    fn finish(self, rows: Rows<T>) -> Grid<T> {
        Grid::from_rows(rows, self.out_of_bounds_fill)
    }
}

impl<T: fmt::Debug> fmt::Debug for GridBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridBuilder")
            .field("out_of_bounds_fill", &self.out_of_bounds_fill)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Value;
    use crate::validation::NonEmpty;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn expected_letters() -> Vec<Cell<String>> {
        let mut cells = Vec::new();
        for (row, line) in ["abc", "def", "xyz"].iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                cells.push(Cell::new(row, col, ch.to_string()));
            }
        }
        cells
    }

    fn stored(grid: &Grid<String>) -> Vec<Cell<String>> {
        grid.iter().cloned().collect()
    }

    #[test]
    fn test_from_columns_swaps_axes() {
        let columns: HashMap<usize, HashMap<usize, String>> = [
            (0, [(0, "a"), (1, "d"), (2, "x")]),
            (1, [(0, "b"), (1, "e"), (2, "y")]),
            (2, [(0, "c"), (1, "f"), (2, "z")]),
        ]
        .into_iter()
        .map(|(col, column)| {
            let column = column
                .into_iter()
                .map(|(row, v)| (row, v.to_string()))
                .collect();
            (col, column)
        })
        .collect();

        let grid = GridBuilder::new().from_columns(columns).unwrap();
        assert_eq!(stored(&grid), expected_letters());
    }

    #[test]
    fn test_from_records() {
        let records = ["abc", "def", "xyz"].iter().map(|line| {
            line.chars()
                .enumerate()
                .map(|(col, ch)| (col, ch.to_string()))
                .collect::<BTreeMap<_, _>>()
        });
        let grid = GridBuilder::new().from_records(records).unwrap();
        assert_eq!(stored(&grid), expected_letters());
    }

    #[test]
    fn test_from_text() {
        let grid = GridBuilder::new()
            .from_text("abc\ndef\nxyz", &TextOptions::default())
            .unwrap();
        assert_eq!(stored(&grid), expected_letters());
    }

    #[test]
    fn test_from_text_with_whitespace_and_sep() {
        let text = "
    a,b,c
    d,e,f
    x,y,z
    ";
        let grid = GridBuilder::new()
            .from_text(text, &TextOptions::with_sep(","))
            .unwrap();
        assert_eq!(stored(&grid), expected_letters());
    }

    #[test]
    fn test_from_rows() {
        let grid = GridBuilder::new()
            .from_rows(vec![vec![1, 2], vec![3, 4]])
            .unwrap();
        assert_eq!(grid.to_values(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(*grid.out_of_bounds_fill(), 0);
    }

    #[test]
    fn test_typed_text() {
        let grid = GridBuilder::<i64>::new()
            .from_text("123\n456", &TextOptions::default())
            .unwrap();
        assert_eq!(grid.to_values(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_typed_text_rejects_bad_field() {
        let err = GridBuilder::<i64>::new()
            .from_text("a\n2\n3", &TextOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Validation { row: 0, col: 0, .. }));
    }

    #[test]
    fn test_value_detection() {
        let grid = GridBuilder::<Value>::new()
            .from_text("1,true,x\n,2.5,y", &TextOptions::with_sep(","))
            .unwrap();
        assert_eq!(
            grid.to_values(),
            vec![
                vec![Value::Number(1.0), Value::Bool(true), Value::text("x")],
                vec![Value::Empty, Value::Number(2.5), Value::text("y")],
            ]
        );
    }

    #[test]
    fn test_validator_rejects() {
        let err = GridBuilder::<String>::new()
            .validator(NonEmpty)
            .from_rows(vec![vec!["a".to_string(), " ".to_string()]])
            .unwrap_err();
        assert_eq!(err, Error::validation(0, 1, "value is empty"));
    }

    #[test]
    fn test_closure_validator() {
        let grid = GridBuilder::<i64>::new()
            .validator(|v: &i64| {
                if *v < 5 {
                    Ok(())
                } else {
                    Err(format!("{} is too large", v))
                }
            })
            .from_text("12\n45", &TextOptions::default());
        assert_eq!(grid.unwrap_err(), Error::validation(1, 1, "5 is too large"));
    }

    #[test]
    fn test_custom_fill() {
        let grid = GridBuilder::with_fill(-1)
            .from_rows(vec![vec![7]])
            .unwrap();
        assert_eq!(*grid.out_of_bounds_fill(), -1);

        let grid = GridBuilder::new()
            .out_of_bounds_fill("default".to_string())
            .from_text("ab", &TextOptions::default())
            .unwrap();
        assert_eq!(grid.out_of_bounds_fill(), "default");
    }
}
