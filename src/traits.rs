use num_traits::{Float, FloatConst, NumCast};
use std::fmt::{Debug, Display};

/// A trait comprising all operations required of the scalar carried by a
/// [`Dual`](crate::Dual).
///
/// This aggregates `num_traits::Float` (providing sin, cos, ln, powf, etc.),
/// `FloatConst` (E, LN_2, LN_10) and the formatting/threading bounds the
/// evaluator relies on. Implemented for `f64` and `f32`.
pub trait MathScalar: Float + FloatConst + Debug + Display + Send + Sync + 'static {}

// Blanket implementation for any type that satisfies the bounds
impl<T> MathScalar for T where T: Float + FloatConst + Debug + Display + Send + Sync + 'static {}

/// Convert a stored literal into the evaluation scalar
pub(crate) fn cast<T: MathScalar>(n: f64) -> Result<T, crate::DiffError> {
    <T as NumCast>::from(n).ok_or_else(|| crate::DiffError::NonNumeric {
        value: n.to_string(),
    })
}
