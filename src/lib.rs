//! Forward-mode Differentiation Library
//!
//! Expressions are immutable trees of constants, variables, arithmetic and
//! a fixed family of logarithmic and trigonometric functions. Evaluating a
//! tree on [`Dual`] numbers yields its value and its exact partial
//! derivative with respect to one chosen variable in a single pass.
//!
//! # Features
//! - Text parser with spans in every syntax error
//! - Operator overloading for building trees in Rust
//! - Generic over the float type (`f64` by default, `f32` works too)
//! - Trees are `Send + Sync` and can be evaluated from many threads
//!
//! # Usage Examples
//!
//! ## String-based API
//! ```
//! use dual_diff::{bindings, diff};
//! let slope = diff("x^2 + sin(x)", "x", &bindings([("x", 0.0)])).unwrap();
//! assert_eq!(slope, 1.0);
//! ```
//!
//! ## Type-safe API
//! ```
//! use dual_diff::{bindings, sym};
//! let x = sym("x");
//! let expr = x.clone().pow(2.0) + x.clone().sin();
//! let d = expr
//!     .evaluate_and_differentiate(Some(&x), &bindings([("x", 0.0)]))
//!     .unwrap();
//! assert_eq!((d.value(), d.partial()), (0.0, 1.0));
//! ```

mod ast;
mod builder;
mod differentiation;
mod display;
mod error;
pub mod functions;
pub(crate) mod math;
mod parser;
mod symbol;
pub mod traits;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::{Expr, ExprKind, Variable};
pub use builder::Diff;
pub use differentiation::{Bindings, bindings};
pub use error::{DiffError, Span};
pub use functions::Function;
pub use math::dual::Dual;
pub use parser::parse;
pub use symbol::{sym, symbols, symbols_sep};
pub use traits::MathScalar;

/// Default maximum AST depth
///
/// A flat chain such as `x + x + ... + x` nests one level per operator, so
/// this also caps the length of such chains.
pub const DEFAULT_MAX_DEPTH: usize = 1_000;
/// Default maximum AST node count
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Main API function: derivative of a formula at a point
///
/// # Arguments
/// * `formula` - Mathematical expression to differentiate (e.g., "x^2 + y")
/// * `var_to_diff` - Variable to differentiate with respect to (e.g., "x")
/// * `bindings` - Values of every variable in the formula
///
/// # Example
/// ```
/// use dual_diff::{bindings, diff};
/// let d = diff("a * x^2", "x", &bindings([("a", 3.0), ("x", 2.0)])).unwrap();
/// assert_eq!(d, 12.0);
/// ```
///
/// # Note
/// For custom limits use the `Diff` builder:
/// ```
/// use dual_diff::{Diff, bindings};
/// let d = Diff::new().max_depth(10).differentiate_str("x^2", "x", &bindings([("x", 1.0)]));
/// assert_eq!(d, Ok(2.0));
/// ```
pub fn diff(
    formula: &str,
    var_to_diff: &str,
    bindings: &Bindings,
) -> Result<f64, DiffError> {
    Diff::new()
        .max_depth(DEFAULT_MAX_DEPTH)
        .max_nodes(DEFAULT_MAX_NODES)
        .differentiate_str(formula, var_to_diff, bindings)
}

/// Value of a formula at a point
///
/// # Example
/// ```
/// use dual_diff::{bindings, evaluate_str};
/// assert_eq!(evaluate_str("log(8, 2) * y", &bindings([("y", 2.0)])), Ok(6.0));
/// ```
pub fn evaluate_str(formula: &str, bindings: &Bindings) -> Result<f64, DiffError> {
    Diff::new().evaluate_str(formula, bindings)
}
