//! Dual-number rules for the unary functions
//!
//! Each rule receives the already-evaluated operand and returns the
//! function's value together with its chain-rule derivative. Points outside
//! the real domain are rejected here rather than left to produce NaN.
//!
//! - log_b(u)' = u' / (ln(b) u), requires u > 0 and b > 0, b != 1
//! - tan(u)' = u' sec²(u), sec(u)' = u' sec(u) tan(u), require cos(u) != 0
//! - cot(u)' = -u' csc²(u), csc(u)' = -u' csc(u) cot(u), require sin(u) != 0

use super::Function;
use crate::traits::{MathScalar, cast};
use crate::{DiffError, Dual};

impl Function {
    /// Apply this function to an evaluated operand
    pub(crate) fn apply<T: MathScalar>(self, u: Dual<T>) -> Result<Dual<T>, DiffError> {
        match self {
            Function::Log(base) => {
                let base: T = cast(base)?;
                if base <= T::zero() || base == T::one() {
                    return Err(DiffError::domain(
                        "log",
                        format!("base {} is not a valid logarithm base", base),
                    ));
                }
                log_argument(self, u)?;
                Ok(u.log(base))
            }
            Function::Ln => log_argument(self, u).map(Dual::ln),
            Function::Log2 => log_argument(self, u).map(Dual::log2),
            Function::Log10 => log_argument(self, u).map(Dual::log10),
            Function::Sin => Ok(u.sin()),
            Function::Cos => Ok(u.cos()),
            Function::Tan => nonzero_cos(self, u).map(Dual::tan),
            Function::Sec => nonzero_cos(self, u).map(Dual::sec),
            Function::Cot => nonzero_sin(self, u).map(Dual::cot),
            Function::Csc => nonzero_sin(self, u).map(Dual::csc),
        }
    }
}

fn log_argument<T: MathScalar>(func: Function, u: Dual<T>) -> Result<Dual<T>, DiffError> {
    if u.value() <= T::zero() {
        return Err(DiffError::domain(
            func.name(),
            format!("argument {} is not positive", u.value()),
        ));
    }
    Ok(u)
}

/// No `f32` or `f64` input makes `cos` return exactly zero, so near odd
/// multiples of π/2 tan and sec evaluate to large finite values instead.
fn nonzero_cos<T: MathScalar>(func: Function, u: Dual<T>) -> Result<Dual<T>, DiffError> {
    nonzero_factor(func, u, "cos", u.value().cos())
}

fn nonzero_sin<T: MathScalar>(func: Function, u: Dual<T>) -> Result<Dual<T>, DiffError> {
    nonzero_factor(func, u, "sin", u.value().sin())
}

fn nonzero_factor<T: MathScalar>(
    func: Function,
    u: Dual<T>,
    factor: &str,
    value: T,
) -> Result<Dual<T>, DiffError> {
    if value.is_zero() {
        return Err(DiffError::domain(
            func.name(),
            format!("{}({}) is zero", factor, u.value()),
        ));
    }
    Ok(u)
}
