//! Prelude module - common imports for gridthings users
//!
//! ```rust
//! use gridthings::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellRef,
    Collection,
    // I/O types
    CsvReadOptions,
    CsvReader,
    Cursor,
    Direction,
    // Error types
    Error,
    // Main types
    Grid,
    // Extension traits
    GridExt,
    GridBuilder,
    Numeric,
    Result,
    TextOptions,
    Validator,
    Value,
};
