//! Traversal engine
//!
//! Peeks are bounds-tolerant: a target with no stored cell yields an
//! [`OutOfBoundsCell`] at the computed position carrying the grid's fill,
//! so algorithms walking up to an edge need no special cases.
//!
//! Neighbourhood order is fixed and part of the contract:
//! - linear: left, right, up, down
//! - diagonal: up-left, up-right, down-left, down-right
//! - all: linear followed by diagonal

use crate::cell::{CellRef, OutOfBoundsCell};
use crate::collection::Collection;
use crate::grid::Grid;

/// A step direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Left, right, up, down
    pub const LINEAR: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Up-left, up-right, down-left, down-right
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// [`Direction::LINEAR`] followed by [`Direction::DIAGONAL`]
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// `(row, col)` step of length one
    pub fn unit(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// `(row, col)` offset after `distance` steps
    pub fn offset(self, distance: isize) -> (isize, isize) {
        let (dr, dc) = self.unit();
        (dr.saturating_mul(distance), dc.saturating_mul(distance))
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Check if both axes move
    pub fn is_diagonal(self) -> bool {
        let (dr, dc) = self.unit();
        dr != 0 && dc != 0
    }
}

impl<T> Grid<T> {
    /// The cell at `(row + row_offset, col + col_offset)`
    ///
    /// Never fails: when nothing is stored at the target, a sentinel at the
    /// target coordinate is returned instead.
    pub fn peek(
        &self,
        row: isize,
        col: isize,
        row_offset: isize,
        col_offset: isize,
    ) -> CellRef<'_, T> {
        let target_row = row.saturating_add(row_offset);
        let target_col = col.saturating_add(col_offset);
        match self.cell_signed(target_row, target_col) {
            Some(cell) => CellRef::InBounds(cell),
            None => {
                log::trace!("peek left the grid at ({}, {})", target_row, target_col);
                CellRef::OutOfBounds(OutOfBoundsCell::new(
                    target_row,
                    target_col,
                    self.out_of_bounds_fill(),
                ))
            }
        }
    }

    /// The cell `distance` steps from `(row, col)` in `direction`
    pub fn peek_direction(
        &self,
        row: isize,
        col: isize,
        direction: Direction,
        distance: isize,
    ) -> CellRef<'_, T> {
        let (row_offset, col_offset) = direction.offset(distance);
        self.peek(row, col, row_offset, col_offset)
    }

    /// The cell `distance` columns to the left
    pub fn peek_left(&self, row: isize, col: isize, distance: isize) -> CellRef<'_, T> {
        self.peek_direction(row, col, Direction::Left, distance)
    }

    /// The cell `distance` columns to the right
    pub fn peek_right(&self, row: isize, col: isize, distance: isize) -> CellRef<'_, T> {
        self.peek_direction(row, col, Direction::Right, distance)
    }

    /// The cell `distance` rows above
    pub fn peek_up(&self, row: isize, col: isize, distance: isize) -> CellRef<'_, T> {
        self.peek_direction(row, col, Direction::Up, distance)
    }

    /// The cell `distance` rows below
    pub fn peek_down(&self, row: isize, col: isize, distance: isize) -> CellRef<'_, T> {
        self.peek_direction(row, col, Direction::Down, distance)
    }

    /// Left, right, up and down neighbours, in that order
    pub fn peek_linear(&self, row: isize, col: isize, distance: isize) -> Collection<'_, T> {
        self.peek_each(row, col, &Direction::LINEAR, distance)
    }

    /// Up-left, up-right, down-left and down-right neighbours, in that order
    pub fn peek_diagonal(&self, row: isize, col: isize, distance: isize) -> Collection<'_, T> {
        self.peek_each(row, col, &Direction::DIAGONAL, distance)
    }

    /// All eight neighbours: [`Grid::peek_linear`] then [`Grid::peek_diagonal`]
    pub fn peek_all(&self, row: isize, col: isize, distance: isize) -> Collection<'_, T> {
        self.peek_linear(row, col, distance)
            .concat(self.peek_diagonal(row, col, distance))
    }

    fn peek_each(
        &self,
        row: isize,
        col: isize,
        directions: &[Direction],
        distance: isize,
    ) -> Collection<'_, T> {
        directions
            .iter()
            .map(|&direction| self.peek_direction(row, col, direction, distance))
            .collect()
    }

    /// `distance` cells starting at `(row, col)` and stepping by
    /// `(row_step, col_step)`
    ///
    /// The first cell is always the start itself. Steps may be negative or
    /// diagonal, and the ray may leave the grid anywhere along the way; those
    /// positions come back as sentinels.
    pub fn line(
        &self,
        row: isize,
        col: isize,
        row_step: isize,
        col_step: isize,
        distance: usize,
    ) -> Collection<'_, T> {
        (0..distance)
            .map(|offset| {
                let offset = isize::try_from(offset).unwrap_or(isize::MAX);
                self.peek(
                    row,
                    col,
                    offset.saturating_mul(row_step),
                    offset.saturating_mul(col_step),
                )
            })
            .collect()
    }

    /// Like [`Grid::line`] with the step taken from `direction`
    pub fn line_toward(
        &self,
        row: isize,
        col: isize,
        direction: Direction,
        distance: usize,
    ) -> Collection<'_, T> {
        let (row_step, col_step) = direction.unit();
        self.line(row, col, row_step, col_step, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GridBuilder;
    use crate::cell::Cell;
    use crate::text::TextOptions;
    use pretty_assertions::assert_eq;

    fn letters() -> Grid<String> {
        GridBuilder::new()
            .from_text("abc\ndef\nxyz", &TextOptions::default())
            .unwrap()
    }

    #[test]
    fn test_peek() {
        let grid = letters();
        assert!(grid.peek(0, 0, 0, 0).value_eq(&"a".to_string()));
        assert!(grid.peek(0, 0, 0, 1).value_eq(&"b".to_string()));
        assert_eq!(grid.peek_left(1, 1, 1).value(), "d");
        assert_eq!(grid.peek_right(1, 1, 1).value(), "f");
        assert_eq!(grid.peek_up(1, 1, 1).value(), "b");
        assert_eq!(grid.peek_down(1, 1, 1).value(), "y");
        assert_eq!(grid.peek_right(1, 0, 2).value(), "f");
    }

    #[test]
    fn test_peek_zero_offset_matches_get() {
        let grid = letters();
        assert_eq!(grid.peek(2, 1, 0, 0), grid.get(2, 1).unwrap());
    }

    #[test]
    fn test_peek_out_of_bounds() {
        let grid = letters();
        let cell = grid.peek(1, 1, -2, 0);
        assert!(cell.is_out_of_bounds());
        assert_eq!(cell.coordinates(), (-1, 1));
        assert_eq!(cell.value(), "");
    }

    #[test]
    fn test_custom_fill() {
        let grid = GridBuilder::new()
            .out_of_bounds_fill("default".to_string())
            .from_text("abc\ndef\nxyz", &TextOptions::default())
            .unwrap();
        let cell = grid.peek_left(0, 0, 1);
        assert!(cell.is_out_of_bounds());
        assert_eq!(cell.coordinates(), (0, -1));
        assert_eq!(cell.value(), "default");
    }

    #[test]
    fn test_peek_linear() {
        let grid = letters();
        let expected = [
            Cell::new(1, 0, "d".to_string()),
            Cell::new(1, 2, "f".to_string()),
            Cell::new(0, 1, "b".to_string()),
            Cell::new(2, 1, "y".to_string()),
        ];
        let expected: Collection<_> = expected.iter().collect();
        assert_eq!(grid.peek_linear(1, 1, 1), expected);
    }

    #[test]
    fn test_peek_diagonal() {
        let grid = letters();
        let diagonal = grid.peek_diagonal(1, 1, 1);
        assert_eq!(diagonal.values(), vec!["a", "c", "x", "z"]);
        assert_eq!(diagonal.coordinates(), vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_peek_all_order() {
        let grid = letters();
        let all = grid.peek_all(1, 1, 1);
        assert_eq!(all.values(), vec!["d", "f", "b", "y", "a", "c", "x", "z"]);
    }

    #[test]
    fn test_peek_all_at_corner() {
        let grid = letters();
        let all = grid.peek_all(0, 0, 1);
        assert_eq!(all.len(), 8);
        assert_eq!(
            all.coordinates(),
            vec![
                (0, -1),
                (0, 1),
                (-1, 0),
                (1, 0),
                (-1, -1),
                (-1, 1),
                (1, -1),
                (1, 1)
            ]
        );
        let outside: Vec<bool> = all.iter().map(|c| c.is_out_of_bounds()).collect();
        assert_eq!(
            outside,
            vec![true, false, true, false, true, true, true, false]
        );
    }

    #[test]
    fn test_line() {
        let grid = letters();
        assert_eq!(grid.line(0, 0, 0, 1, 3).values(), vec!["a", "b", "c"]);
        assert_eq!(grid.line(0, 0, 1, 0, 3).values(), vec!["a", "d", "x"]);
        assert_eq!(grid.line(0, 0, 1, 1, 3).values(), vec!["a", "e", "z"]);
        assert_eq!(grid.line(2, 2, -1, -1, 3).values(), vec!["z", "e", "a"]);
        assert!(grid.line(0, 0, 0, 1, 0).is_empty());
    }

    #[test]
    fn test_line_out_of_bounds() {
        let grid = letters();
        let line = grid.line(0, 0, -1, 0, 2);
        assert_eq!(line.coordinates(), vec![(0, 0), (-1, 0)]);
        assert!(!line[0].is_out_of_bounds());
        assert!(line[1].is_out_of_bounds());
        assert!(line.extends_out_of_bounds());
    }

    #[test]
    fn test_line_with_long_step() {
        let grid = letters();
        let line = grid.line(1, 1, 0, 2, 3);
        assert_eq!(line.coordinates(), vec![(1, 1), (1, 3), (1, 5)]);
        assert_eq!(line.iter().filter(|c| c.is_out_of_bounds()).count(), 2);
    }

    #[test]
    fn test_line_toward() {
        let grid = letters();
        let line = grid.line_toward(2, 0, Direction::UpRight, 3);
        assert_eq!(line.values(), vec!["x", "e", "c"]);
    }

    #[test]
    fn test_directions() {
        assert_eq!(Direction::ALL[..4].to_vec(), Direction::LINEAR.to_vec());
        assert_eq!(Direction::ALL[4..].to_vec(), Direction::DIAGONAL.to_vec());
        assert_eq!(Direction::UpLeft.offset(3), (-3, -3));
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert!(Direction::DownLeft.is_diagonal());
        assert!(!Direction::Right.is_diagonal());
        for direction in Direction::ALL {
            let (dr, dc) = direction.unit();
            assert_eq!(direction.opposite().unit(), (-dr, -dc));
        }
    }

    #[test]
    fn test_saturating_coordinates() {
        let grid = letters();
        let cell = grid.peek(isize::MAX, 0, 1, 0);
        assert!(cell.is_out_of_bounds());
        assert_eq!(cell.row(), isize::MAX);
    }
}
