//! Cursor sessions
//!
//! A [`Cursor`] binds a current position on a grid so traversal calls can
//! leave out coordinates. The cursor belongs to the caller, not to the grid:
//! the grid stays immutable and any number of cursors may walk it at once.
//! A single cursor is a one-session resource; `enter` needs `&mut self`.
//!
//! ## Example
//!
//! ```rust
//! use gridthings_core::{GridBuilder, TextOptions};
//!
//! let grid = GridBuilder::<String>::new()
//!     .from_text("abc\ndef\nxyz", &TextOptions::default())
//!     .unwrap();
//!
//! let mut cursor = grid.cursor();
//! cursor.enter(1, 1).unwrap();
//! assert_eq!(cursor.peek_up(1).unwrap().value(), "b");
//! ```

use crate::cell::CellRef;
use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::traverse::Direction;

const NOT_SET: &str = "cursor not set";

/// A caller-owned position on a [`Grid`]
#[derive(Debug)]
pub struct Cursor<'g, T> {
    grid: &'g Grid<T>,
    position: Option<(usize, usize)>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            position: self.position,
        }
    }
}

impl<'g, T> Cursor<'g, T> {
    /// Create an unpositioned cursor over `grid`
    pub fn new(grid: &'g Grid<T>) -> Self {
        Self {
            grid,
            position: None,
        }
    }

    /// The grid this cursor walks
    pub fn grid(&self) -> &'g Grid<T> {
        self.grid
    }

    /// Current `(row, col)`, if [`Cursor::enter`] has been called
    pub fn position(&self) -> Option<(usize, usize)> {
        self.position
    }

    /// Move to `(row, col)` and return the cell there
    ///
    /// Fails with [`Error::OutOfRange`] if no cell is stored at the target;
    /// the previous position is kept in that case.
    pub fn enter(&mut self, row: usize, col: usize) -> Result<CellRef<'g, T>> {
        let cell = self.grid.get(row, col)?;
        self.position = Some((row, col));
        Ok(cell)
    }

    /// The cell under the cursor
    pub fn current(&self) -> Result<CellRef<'g, T>> {
        let (row, col) = self.position.ok_or(Error::InvalidState(NOT_SET))?;
        self.grid.get(row, col)
    }

    fn origin(&self) -> Result<(isize, isize)> {
        let (row, col) = self.position.ok_or(Error::InvalidState(NOT_SET))?;
        Ok((row as isize, col as isize))
    }

    /// See [`Grid::peek`]
    pub fn peek(&self, row_offset: isize, col_offset: isize) -> Result<CellRef<'g, T>> {
        let (row, col) = self.origin()?;
        Ok(self.grid.peek(row, col, row_offset, col_offset))
    }

    /// See [`Grid::peek_direction`]
    pub fn peek_direction(&self, direction: Direction, distance: isize) -> Result<CellRef<'g, T>> {
        let (row, col) = self.origin()?;
        Ok(self.grid.peek_direction(row, col, direction, distance))
    }

    /// See [`Grid::peek_left`]
    pub fn peek_left(&self, distance: isize) -> Result<CellRef<'g, T>> {
        self.peek_direction(Direction::Left, distance)
    }

    /// See [`Grid::peek_right`]
    pub fn peek_right(&self, distance: isize) -> Result<CellRef<'g, T>> {
        self.peek_direction(Direction::Right, distance)
    }

    /// See [`Grid::peek_up`]
    pub fn peek_up(&self, distance: isize) -> Result<CellRef<'g, T>> {
        self.peek_direction(Direction::Up, distance)
    }

    /// See [`Grid::peek_down`]
    pub fn peek_down(&self, distance: isize) -> Result<CellRef<'g, T>> {
        self.peek_direction(Direction::Down, distance)
    }

    /// See [`Grid::peek_linear`]
    pub fn peek_linear(&self, distance: isize) -> Result<Collection<'g, T>> {
        let (row, col) = self.origin()?;
        Ok(self.grid.peek_linear(row, col, distance))
    }

    /// See [`Grid::peek_diagonal`]
    pub fn peek_diagonal(&self, distance: isize) -> Result<Collection<'g, T>> {
        let (row, col) = self.origin()?;
        Ok(self.grid.peek_diagonal(row, col, distance))
    }

    /// See [`Grid::peek_all`]
    pub fn peek_all(&self, distance: isize) -> Result<Collection<'g, T>> {
        let (row, col) = self.origin()?;
        Ok(self.grid.peek_all(row, col, distance))
    }

    /// See [`Grid::line`]
    pub fn line(&self, row_step: isize, col_step: isize, distance: usize) -> Result<Collection<'g, T>> {
        let (row, col) = self.origin()?;
        Ok(self.grid.line(row, col, row_step, col_step, distance))
    }

    /// The row under the cursor
    pub fn active_row(&self) -> Result<Collection<'g, T>> {
        let (row, _) = self.position.ok_or(Error::InvalidState(NOT_SET))?;
        Ok(self.grid.get_row(row))
    }

    /// The column under the cursor
    pub fn active_column(&self) -> Result<Collection<'g, T>> {
        let (_, col) = self.position.ok_or(Error::InvalidState(NOT_SET))?;
        Ok(self.grid.get_column(col))
    }
}
