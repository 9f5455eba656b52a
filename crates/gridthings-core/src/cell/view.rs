//! Borrowed cell views returned by lookups and traversal

use std::fmt;

use super::Cell;

/// A synthesized cell marking a lookup outside the grid
///
/// Never stored. Its coordinates are the computed target, which may be
/// negative or past the last row/column, and its value is the grid's
/// out-of-bounds fill.
#[derive(Debug)]
pub struct OutOfBoundsCell<'g, T> {
    row: isize,
    col: isize,
    value: &'g T,
}

impl<'g, T> OutOfBoundsCell<'g, T> {
    /// Create a sentinel at `(row, col)` carrying `fill`
    pub fn new(row: isize, col: isize, fill: &'g T) -> Self {
        Self {
            row,
            col,
            value: fill,
        }
    }

    /// Target row (may be negative)
    pub fn row(&self) -> isize {
        self.row
    }

    /// Target column (may be negative)
    pub fn col(&self) -> isize {
        self.col
    }

    /// The fill value
    pub fn value(&self) -> &'g T {
        self.value
    }
}

impl<T> Clone for OutOfBoundsCell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OutOfBoundsCell<'_, T> {}

/// A cell as seen through a grid query
///
/// Either a stored cell borrowed from the grid, or a sentinel produced by a
/// peek that left the grid. Cheap to copy.
///
/// Equality compares row, column and value, not the variant. Value-only
/// comparison is [`CellRef::value_eq`].
#[derive(Debug)]
pub enum CellRef<'g, T> {
    /// A cell stored in the grid
    InBounds(&'g Cell<T>),
    /// A sentinel outside the stored cells
    OutOfBounds(OutOfBoundsCell<'g, T>),
}

impl<'g, T> CellRef<'g, T> {
    /// Row coordinate
    pub fn row(&self) -> isize {
        match self {
            CellRef::InBounds(cell) => cell.row() as isize,
            CellRef::OutOfBounds(cell) => cell.row(),
        }
    }

    /// Column coordinate
    pub fn col(&self) -> isize {
        match self {
            CellRef::InBounds(cell) => cell.col() as isize,
            CellRef::OutOfBounds(cell) => cell.col(),
        }
    }

    /// `(row, col)` pair
    pub fn coordinates(&self) -> (isize, isize) {
        (self.row(), self.col())
    }

    /// The cell's value, or the fill for a sentinel
    pub fn value(&self) -> &'g T {
        match self {
            CellRef::InBounds(cell) => cell.value(),
            CellRef::OutOfBounds(cell) => cell.value(),
        }
    }

    /// Check if this is a sentinel
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, CellRef::OutOfBounds(_))
    }

    /// The stored cell, if any
    pub fn as_cell(&self) -> Option<&'g Cell<T>> {
        match self {
            CellRef::InBounds(cell) => Some(cell),
            CellRef::OutOfBounds(_) => None,
        }
    }

    /// Compare only the value, ignoring position
    pub fn value_eq(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.value() == other
    }
}

impl<T> Clone for CellRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellRef<'_, T> {}

impl<'g, T> From<&'g Cell<T>> for CellRef<'g, T> {
    fn from(cell: &'g Cell<T>) -> Self {
        CellRef::InBounds(cell)
    }
}

impl<'g, T> From<OutOfBoundsCell<'g, T>> for CellRef<'g, T> {
    fn from(cell: OutOfBoundsCell<'g, T>) -> Self {
        CellRef::OutOfBounds(cell)
    }
}

impl<T: PartialEq> PartialEq for CellRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates() == other.coordinates() && self.value() == other.value()
    }
}

impl<T: PartialEq> PartialEq<Cell<T>> for CellRef<'_, T> {
    fn eq(&self, other: &Cell<T>) -> bool {
        self.coordinates() == (other.row() as isize, other.col() as isize)
            && self.value() == other.value()
    }
}

impl<T: fmt::Debug> fmt::Display for CellRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRef::InBounds(_) => write!(f, "({}, {}) {:?}", self.row(), self.col(), self.value()),
            CellRef::OutOfBounds(_) => {
                write!(f, "({}, {}) out of bounds", self.row(), self.col())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_view() {
        let cell = Cell::new(1, 2, "e");
        let view = CellRef::from(&cell);
        assert_eq!(view.coordinates(), (1, 2));
        assert_eq!(*view.value(), "e");
        assert!(!view.is_out_of_bounds());
        assert_eq!(view.as_cell(), Some(&cell));
        assert_eq!(view, cell);
    }

    #[test]
    fn test_sentinel_view() {
        let fill = "";
        let view = CellRef::from(OutOfBoundsCell::new(-1, 1, &fill));
        assert_eq!(view.coordinates(), (-1, 1));
        assert!(view.is_out_of_bounds());
        assert!(view.value_eq(&""));
        assert!(view.as_cell().is_none());
    }

    #[test]
    fn test_equality_ignores_variant() {
        let fill = 0;
        let cell = Cell::new(0, 3, 0);
        let stored = CellRef::from(&cell);
        let sentinel = CellRef::from(OutOfBoundsCell::new(0, 3, &fill));
        assert_eq!(stored, sentinel);
    }

    #[test]
    fn test_display() {
        let cell = Cell::new(0, 1, "b");
        assert_eq!(CellRef::from(&cell).to_string(), "(0, 1) \"b\"");
        let fill = "";
        let sentinel = CellRef::from(OutOfBoundsCell::new(-2, 0, &fill));
        assert_eq!(sentinel.to_string(), "(-2, 0) out of bounds");
    }
}
