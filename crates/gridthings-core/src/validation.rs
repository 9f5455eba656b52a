//! Cell validation
//!
//! A [`Validator`] is checked against every value while a grid is built.
//! The first rejected value aborts construction with
//! [`Error::Validation`](crate::Error::Validation), carrying the position
//! of the offending cell.
//!
//! ## Example
//!
//! ```rust
//! use gridthings_core::{GridBuilder, InRange, TextOptions};
//!
//! let grid = GridBuilder::<i64>::new()
//!     .validator(InRange::new(0, 5))
//!     .from_text("123\n456", &TextOptions::default());
//! assert!(grid.is_err());
//! ```

use std::fmt;

use crate::cell::Value;

/// A per-cell check applied at construction time
pub trait Validator<T> {
    /// Accept `value`, or explain why it is rejected
    fn validate(&self, value: &T) -> Result<(), String>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(&T) -> Result<(), String>,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        self(value)
    }
}

/// Rejects blank values
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmpty;

impl Validator<String> for NonEmpty {
    fn validate(&self, value: &String) -> Result<(), String> {
        if value.trim().is_empty() {
            Err("value is empty".into())
        } else {
            Ok(())
        }
    }
}

impl Validator<Value> for NonEmpty {
    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Empty => Err("value is empty".into()),
            Value::Text(s) if s.trim().is_empty() => Err("value is empty".into()),
            _ => Ok(()),
        }
    }
}

/// Accepts values within an inclusive range
#[derive(Debug, Clone)]
pub struct InRange<T> {
    min: T,
    max: T,
}

impl<T> InRange<T> {
    /// Create a range check for `min..=max`
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd + fmt::Debug> Validator<T> for InRange<T> {
    fn validate(&self, value: &T) -> Result<(), String> {
        if *value >= self.min && *value <= self.max {
            Ok(())
        } else {
            Err(format!(
                "{:?} is outside {:?}..={:?}",
                value, self.min, self.max
            ))
        }
    }
}
