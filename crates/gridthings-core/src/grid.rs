//! Grid store
//!
//! Cells are kept in a row-based `BTreeMap<row, BTreeMap<col, Cell>>`, so
//! iteration is always row-major without any sorting. Rows may differ in
//! length; [`Grid::shape`] and [`Grid::is_regular`] report that instead of
//! hiding it.

use std::collections::BTreeMap;
use std::fmt;

use crate::builder::GridBuilder;
use crate::cell::{Cell, CellRef};
use crate::collection::Collection;
use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Row index → column map
pub(crate) type Rows<T> = BTreeMap<usize, BTreeMap<usize, Cell<T>>>;

/// Two-dimensional tabular data addressed by `(row, col)`
///
/// A grid is built once (see [`GridBuilder`]) and is read-only afterwards,
/// so it can be shared across threads whenever `T` can. Hard lookups go
/// through [`Grid::get`]; bounds-tolerant lookups are the peek family in
/// [`crate::traverse`].
#[derive(Debug, Clone)]
pub struct Grid<T> {
    rows: Rows<T>,
    out_of_bounds_fill: T,
}

impl<T> Grid<T> {
    pub(crate) fn from_rows(rows: Rows<T>, out_of_bounds_fill: T) -> Self {
        let grid = Self {
            rows,
            out_of_bounds_fill,
        };
        log::debug!(
            "Built grid: {} rows, {} cells, regular={}",
            grid.row_count(),
            grid.cell_count(),
            grid.is_regular()
        );
        grid
    }

    /// Start building a grid whose out-of-bounds fill is `T::default()`
    pub fn builder() -> GridBuilder<T>
    where
        T: Default,
    {
        GridBuilder::new()
    }

    /// Get the cell at `(row, col)`
    ///
    /// Unlike [`Grid::peek`], this fails with [`Error::OutOfRange`] when no
    /// cell is stored there.
    pub fn get(&self, row: usize, col: usize) -> Result<CellRef<'_, T>> {
        self.cell(row, col)
            .map(CellRef::InBounds)
            .ok_or(Error::OutOfRange { row, col })
    }

    /// Get the stored cell at `(row, col)`, if any
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell<T>> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Look up a signed coordinate; negative positions are never stored
    pub(crate) fn cell_signed(&self, row: isize, col: isize) -> Option<&Cell<T>> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cell(row, col)
    }

    /// Check if a cell is stored at `(row, col)`
    pub fn contains(&self, row: isize, col: isize) -> bool {
        self.cell_signed(row, col).is_some()
    }

    /// All cells of row `row`, by ascending column
    ///
    /// Empty if the row does not exist.
    pub fn get_row(&self, row: usize) -> Collection<'_, T> {
        self.iter_row(row).collect()
    }

    /// All cells of column `col`, by ascending row
    ///
    /// Rows too short to reach `col` are skipped.
    pub fn get_column(&self, col: usize) -> Collection<'_, T> {
        self.rows.values().filter_map(|r| r.get(&col)).collect()
    }

    /// Every cell in row-major order
    pub fn flatten(&self) -> Collection<'_, T> {
        self.iter().collect()
    }

    /// Bare values grouped by row, in row-major order
    pub fn values(&self) -> Vec<Vec<&T>> {
        self.rows
            .values()
            .map(|r| r.values().map(Cell::value).collect())
            .collect()
    }

    /// Owned copy of [`Grid::values`]
    pub fn to_values(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows
            .values()
            .map(|r| r.values().map(|cell| cell.value().clone()).collect())
            .collect()
    }

    /// `(row count, column count)`
    ///
    /// The column count is the length of the first row only. For an
    /// irregular grid it is neither the widest nor the narrowest row; check
    /// [`Grid::is_regular`] first.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.first_row_len())
    }

    /// True if every row has the same length as the first row
    pub fn is_regular(&self) -> bool {
        let width = self.first_row_len();
        self.rows.values().all(|r| r.len() == width)
    }

    fn first_row_len(&self) -> usize {
        self.rows.values().next().map_or(0, BTreeMap::len)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in row `row` (0 if the row does not exist)
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(&row).map_or(0, BTreeMap::len)
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Value carried by out-of-bounds sentinels
    pub fn out_of_bounds_fill(&self) -> &T {
        &self.out_of_bounds_fill
    }

    /// Iterate over all cells in row order
    pub fn iter(&self) -> impl Iterator<Item = &Cell<T>> {
        self.rows.values().flat_map(|r| r.values())
    }

    /// Iterate over cells in a specific row
    pub fn iter_row(&self, row: usize) -> impl Iterator<Item = &Cell<T>> {
        self.rows.get(&row).into_iter().flat_map(|r| r.values())
    }

    /// Open a cursor session over this grid
    ///
    /// Each cursor carries its own position, so any number of them can walk
    /// the same grid independently.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }
}

impl<T> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_regular() {
            let (rows, cols) = self.shape();
            write!(f, "<Grid shape=({}, {})>", rows, cols)
        } else {
            write!(f, "<Grid shape=(irregular)>")
        }
    }
}
