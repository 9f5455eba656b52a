//! Ordered sequences of cells
//!
//! A [`Collection`] is what every multi-cell query returns: a row or column
//! of a grid, a ray traced by [`Grid::line`](crate::Grid::line), or the
//! neighbourhood around a cell from [`Grid::peek_all`](crate::Grid::peek_all).
//! It may contain sentinels and has no owning grid.
//!
//! Ordering and aggregates look at cell values, not at positions.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, Index, RangeBounds};

use crate::cell::{Cell, CellRef, Numeric};
use crate::error::{Error, Result};

/// An ordered, finite sequence of cells
#[derive(Debug, PartialEq)]
pub struct Collection<'g, T> {
    cells: Vec<CellRef<'g, T>>,
}

impl<'g, T> Collection<'g, T> {
    /// Create a collection from cell views
    pub fn new(cells: Vec<CellRef<'g, T>>) -> Self {
        Self { cells }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the collection has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell by index
    ///
    /// Negative indices count back from the end, so `-1` is the last cell.
    pub fn get(&self, index: isize) -> Option<CellRef<'g, T>> {
        let len = self.cells.len() as isize;
        let index = if index < 0 { len + index } else { index };
        if (0..len).contains(&index) {
            Some(self.cells[index as usize])
        } else {
            None
        }
    }

    /// First cell
    pub fn first(&self) -> Option<CellRef<'g, T>> {
        self.cells.first().copied()
    }

    /// Last cell
    pub fn last(&self) -> Option<CellRef<'g, T>> {
        self.cells.last().copied()
    }

    /// Copy out a sub-range as a new collection
    ///
    /// Bounds may be negative (counted from the end) and are clamped to the
    /// collection, so `slice(1..)`, `slice(..-1)` and `slice(..)` all behave
    /// like their list-slicing counterparts and never panic.
    pub fn slice<R: RangeBounds<isize>>(&self, range: R) -> Self {
        let len = self.cells.len() as isize;
        let clamp = |i: isize| -> isize {
            if i < 0 {
                (len + i).max(0)
            } else {
                i.min(len)
            }
        };

        let start = match range.start_bound() {
            Bound::Included(&s) => clamp(s),
            Bound::Excluded(&s) => clamp(s).saturating_add(1).min(len),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => clamp(e).saturating_add(1).min(len),
            Bound::Excluded(&e) => clamp(e),
            Bound::Unbounded => len,
        };

        if start >= end {
            return Self::default();
        }
        Self::new(self.cells[start as usize..end as usize].to_vec())
    }

    /// Iterate over the cells
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = CellRef<'g, T>> + ExactSizeIterator + '_ {
        self.cells.iter().copied()
    }

    /// Position of the first cell whose value equals `value`
    pub fn index_of(&self, value: &T) -> Result<usize>
    where
        T: PartialEq + fmt::Debug,
    {
        self.cells
            .iter()
            .position(|cell| cell.value_eq(value))
            .ok_or_else(|| Error::NotFound(format!("{:?} is not in collection", value)))
    }

    /// Append the cells of `other`, keeping order
    pub fn concat(mut self, other: Collection<'g, T>) -> Self {
        self.cells.extend(other.cells);
        self
    }

    /// The cells in reverse order
    pub fn reversed(&self) -> Self {
        Self::new(self.cells.iter().rev().copied().collect())
    }

    /// Bare values, in order
    pub fn values(&self) -> Vec<&'g T> {
        self.cells.iter().map(|cell| cell.value()).collect()
    }

    /// `(row, col)` of every cell, in order
    pub fn coordinates(&self) -> Vec<(isize, isize)> {
        self.cells.iter().map(CellRef::coordinates).collect()
    }

    /// True if any cell is an out-of-bounds sentinel
    pub fn extends_out_of_bounds(&self) -> bool {
        self.cells.iter().any(CellRef::is_out_of_bounds)
    }

    /// The cell with the smallest value
    ///
    /// On ties the earliest cell wins. Returns `Ok(None)` when empty.
    pub fn min(&self) -> Result<Option<CellRef<'g, T>>>
    where
        T: PartialOrd + fmt::Debug,
    {
        self.extreme(Ordering::Less)
    }

    /// The cell with the largest value
    ///
    /// On ties the earliest cell wins. Returns `Ok(None)` when empty.
    pub fn max(&self) -> Result<Option<CellRef<'g, T>>>
    where
        T: PartialOrd + fmt::Debug,
    {
        self.extreme(Ordering::Greater)
    }

    fn extreme(&self, wanted: Ordering) -> Result<Option<CellRef<'g, T>>>
    where
        T: PartialOrd + fmt::Debug,
    {
        let mut cells = self.cells.iter().copied();
        let Some(mut best) = cells.next() else {
            return Ok(None);
        };
        for cell in cells {
            if compare(cell.value(), best.value())? == wanted {
                best = cell;
            }
        }
        Ok(Some(best))
    }

    /// A copy sorted by value (stable)
    pub fn sorted(&self) -> Result<Self>
    where
        T: PartialOrd + fmt::Debug,
    {
        let mut mismatch = None;
        let mut cells = self.cells.clone();
        cells.sort_by(|a, b| match compare(a.value(), b.value()) {
            Ok(ordering) => ordering,
            Err(err) => {
                if mismatch.is_none() {
                    mismatch = Some(err);
                }
                Ordering::Equal
            }
        });
        match mismatch {
            Some(err) => Err(err),
            None => Ok(Self::new(cells)),
        }
    }

    /// Sum of all values (0 when empty)
    pub fn sum(&self) -> Result<f64>
    where
        T: Numeric + fmt::Debug,
    {
        Ok(self.numbers()?.into_iter().sum())
    }

    /// Product of all values (1 when empty)
    pub fn product(&self) -> Result<f64>
    where
        T: Numeric + fmt::Debug,
    {
        Ok(self.numbers()?.into_iter().product())
    }

    /// Median of all values
    ///
    /// With an even number of cells this is the mean of the two middle values.
    pub fn median(&self) -> Result<f64>
    where
        T: Numeric + fmt::Debug,
    {
        let mut numbers = self.numbers()?;
        if numbers.is_empty() {
            return Err(Error::NotFound("median of an empty collection".into()));
        }
        numbers.sort_by(f64::total_cmp);
        let mid = numbers.len() / 2;
        if numbers.len() % 2 == 1 {
            Ok(numbers[mid])
        } else {
            Ok((numbers[mid - 1] + numbers[mid]) / 2.0)
        }
    }

    fn numbers(&self) -> Result<Vec<f64>>
    where
        T: Numeric + fmt::Debug,
    {
        self.cells
            .iter()
            .map(|cell| {
                let value = cell.value();
                value
                    .as_f64()
                    .ok_or_else(|| Error::type_mismatch("a numeric value", format!("{:?}", value)))
            })
            .collect()
    }
}

fn compare<T: PartialOrd + fmt::Debug>(a: &T, b: &T) -> Result<Ordering> {
    a.partial_cmp(b).ok_or_else(|| {
        Error::type_mismatch(
            format!("a value comparable with {:?}", b),
            format!("{:?}", a),
        )
    })
}

impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.cells.clone())
    }
}

impl<T> Default for Collection<'_, T> {
    fn default() -> Self {
        Self { cells: Vec::new() }
    }
}

impl<'g, T> Index<usize> for Collection<'g, T> {
    type Output = CellRef<'g, T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl<'g, T> IntoIterator for Collection<'g, T> {
    type Item = CellRef<'g, T>;
    type IntoIter = std::vec::IntoIter<CellRef<'g, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a, 'g, T> IntoIterator for &'a Collection<'g, T> {
    type Item = CellRef<'g, T>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, CellRef<'g, T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}

impl<'g, T> FromIterator<CellRef<'g, T>> for Collection<'g, T> {
    fn from_iter<I: IntoIterator<Item = CellRef<'g, T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'g, T> FromIterator<&'g Cell<T>> for Collection<'g, T> {
    fn from_iter<I: IntoIterator<Item = &'g Cell<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(CellRef::InBounds).collect())
    }
}

impl<'g, T> Extend<CellRef<'g, T>> for Collection<'g, T> {
    fn extend<I: IntoIterator<Item = CellRef<'g, T>>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
