//! # gridthings-core
//!
//! Grid storage and traversal engine for gridthings.
//!
//! This crate provides the fundamental types used throughout gridthings:
//! - [`Grid`] - Immutable two-dimensional cells addressed by `(row, col)`
//! - [`Cell`], [`CellRef`], [`OutOfBoundsCell`] - Stored cells and the views queries return
//! - [`Collection`] - Ordered sequences of cells with value-aware ordering and aggregates
//! - [`Direction`] and the peek family - Bounds-tolerant neighbour lookup and rays
//! - [`Cursor`] - A caller-owned current position for coordinate-free traversal
//! - [`GridBuilder`], [`TextOptions`], [`Validator`] - Construction and validation
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
//! // Neighbours of the centre cell, diagonals only
//! let corners = grid.peek_diagonal(1, 1, 1);
//! assert_eq!(corners.values(), vec!["a", "c", "x", "z"]);
//!
//! // Walking off the top edge yields a sentinel instead of an error
//! let ray = grid.line(0, 0, -1, 0, 2);
//! assert!(ray.extends_out_of_bounds());
//! ```

pub mod builder;
pub mod cell;
pub mod collection;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod text;
pub mod traverse;
pub mod validation;

// Re-exports for convenience
pub use builder::GridBuilder;
pub use cell::{Cell, CellRef, Numeric, OutOfBoundsCell, Value};
pub use collection::Collection;
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use grid::Grid;
pub use text::TextOptions;
pub use traverse::Direction;
pub use validation::{InRange, NonEmpty, Validator};

/// Grid of integers, e.g. digits read from text
pub type IntGrid = Grid<i64>;

/// Grid of raw text fields
pub type TextGrid = Grid<String>;

/// Grid of type-detected values
pub type ValueGrid = Grid<Value>;
