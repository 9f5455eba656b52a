//! Stored cells

/// A single `(row, col, value)` entry owned by a [`Grid`](crate::Grid)
///
/// Cells are created once while a grid is built and never change afterwards.
/// Two cells are equal when position and value all match. To compare only
/// the payload use [`Cell::value_eq`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<T> {
    row: usize,
    col: usize,
    value: T,
}

impl<T> Cell<T> {
    /// Create a new cell
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Row index (0-based)
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index (0-based)
    pub fn col(&self) -> usize {
        self.col
    }

    /// The cell's value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the cell, returning its value
    pub fn into_value(self) -> T {
        self.value
    }

    /// Compare only the value, ignoring position
    pub fn value_eq(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.value == *other
    }
}
