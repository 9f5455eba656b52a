//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - A stored `(row, col, value)` entry
//! - [`OutOfBoundsCell`] - A sentinel synthesized by traversal off the grid
//! - [`CellRef`] - A borrowed view over either of the above
//! - [`Value`] - A dynamically typed cell value
//! - [`Numeric`] - The numeric reading used by collection aggregates

mod numeric;
mod stored;
mod value;
mod view;

pub use numeric::Numeric;
pub use stored::Cell;
pub use value::Value;
pub use view::{CellRef, OutOfBoundsCell};
