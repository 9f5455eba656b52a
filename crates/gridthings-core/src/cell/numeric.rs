//! Numeric view of cell values used by collection aggregates

use super::Value;

/// A cell value that may take part in numeric aggregation
///
/// `sum`, `product` and `median` on a [`Collection`](crate::Collection)
/// go through this trait. Returning `None` marks the value as non-numeric,
/// which the aggregate reports as a type mismatch.
pub trait Numeric {
    /// The value as an `f64`, if it has a numeric reading
    fn as_f64(&self) -> Option<f64>;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn as_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Numeric for Value {
    fn as_f64(&self) -> Option<f64> {
        self.as_number()
    }
}

impl<T: Numeric> Numeric for Option<T> {
    fn as_f64(&self) -> Option<f64> {
        self.as_ref().and_then(Numeric::as_f64)
    }
}
