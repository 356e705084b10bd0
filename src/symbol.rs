//! Operator overloading and helpers for building trees by hand
//!
//! # Example
//! ```
//! use dual_diff::{bindings, sym};
//!
//! let x = sym("x");
//! let f = x.clone().cos() + (x.clone() * x.clone() / 100.0).sin() * x.clone() / 50.0;
//! let d = f
//!     .evaluate_and_differentiate(Some(&x), &bindings([("x", 1.0_f64)]))
//!     .unwrap();
//! assert!(d.value().is_finite() && d.partial().is_finite());
//! ```
//!
//! Rust's `^` binds looser than `+`, `-`, `*` and `/`; prefer [`Expr::pow`]
//! or parenthesize (`(x ^ 2.0) + 1.0`) when using it for powers.

use crate::functions::Function;
use crate::{Expr, Variable};
use std::ops::{Add, BitXor, Div, Mul, Sub};

// Numeric literals are wrapped as constants at every composition site

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::constant(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::constant(f64::from(n))
    }
}

impl From<Variable> for Expr {
    fn from(v: Variable) -> Self {
        v.to_expr()
    }
}

impl From<&Variable> for Expr {
    fn from(v: &Variable) -> Self {
        v.to_expr()
    }
}

// ===== Macro for generating operator implementations =====

macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty, $to_lhs:expr, $to_rhs:expr) => {
        impl Add<$rhs> for $lhs {
            type Output = Expr;
            fn add(self, rhs: $rhs) -> Expr {
                Expr::add_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Sub<$rhs> for $lhs {
            type Output = Expr;
            fn sub(self, rhs: $rhs) -> Expr {
                Expr::sub_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Mul<$rhs> for $lhs {
            type Output = Expr;
            fn mul(self, rhs: $rhs) -> Expr {
                Expr::mul_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl Div<$rhs> for $lhs {
            type Output = Expr;
            fn div(self, rhs: $rhs) -> Expr {
                Expr::div_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
        impl BitXor<$rhs> for $lhs {
            type Output = Expr;
            fn bitxor(self, rhs: $rhs) -> Expr {
                Expr::pow_expr($to_lhs(self), $to_rhs(rhs))
            }
        }
    };
}

// Expr operations
impl_binary_ops!(Expr, Expr, |s: Expr| s, |r: Expr| r);
impl_binary_ops!(Expr, Variable, |s: Expr| s, |r: Variable| r.to_expr());
impl_binary_ops!(Expr, f64, |s: Expr| s, Expr::constant);
impl_binary_ops!(&Expr, &Expr, |s: &Expr| s.clone(), |r: &Expr| r.clone());
impl_binary_ops!(&Expr, &Variable, |s: &Expr| s.clone(), |r: &Variable| r.to_expr());
impl_binary_ops!(&Expr, f64, |s: &Expr| s.clone(), Expr::constant);

// Variable operations
impl_binary_ops!(Variable, Variable, |s: Variable| s.to_expr(), |r: Variable| r.to_expr());
impl_binary_ops!(Variable, Expr, |s: Variable| s.to_expr(), |r: Expr| r);
impl_binary_ops!(Variable, f64, |s: Variable| s.to_expr(), Expr::constant);
impl_binary_ops!(&Variable, &Variable, |s: &Variable| s.to_expr(), |r: &Variable| r.to_expr());
impl_binary_ops!(&Variable, &Expr, |s: &Variable| s.to_expr(), |r: &Expr| r.clone());
impl_binary_ops!(&Variable, f64, |s: &Variable| s.to_expr(), Expr::constant);

// Reflected: f64 on the left side
impl_binary_ops!(f64, Expr, Expr::constant, |r: Expr| r);
impl_binary_ops!(f64, Variable, Expr::constant, |r: Variable| r.to_expr());
impl_binary_ops!(f64, &Expr, Expr::constant, |r: &Expr| r.clone());
impl_binary_ops!(f64, &Variable, Expr::constant, |r: &Variable| r.to_expr());

// ===== Math function methods for both Expr and Variable =====

macro_rules! impl_math_functions {
    ($type:ty, $converter:expr, $($fn_name:ident => $func:expr),* $(,)?) => {
        impl $type {
            $(
                pub fn $fn_name(self) -> Expr {
                    Expr::func($func, $converter(self))
                }
            )*

            /// Logarithm in the given base
            pub fn log(self, base: f64) -> Expr {
                Expr::func(Function::Log(base), $converter(self))
            }

            /// Raise to a power
            pub fn pow(self, exp: impl Into<Expr>) -> Expr {
                Expr::pow_expr($converter(self), exp.into())
            }
        }
    };
}

macro_rules! math_function_list {
    ($macro_name:ident, $type:ty, $converter:expr) => {
        $macro_name!($type, $converter,
            // Trigonometric functions
            sin => Function::Sin, cos => Function::Cos, tan => Function::Tan,
            cot => Function::Cot, sec => Function::Sec, csc => Function::Csc,
            // Logarithms
            ln => Function::Ln, log2 => Function::Log2, log10 => Function::Log10,
        );
    };
}

math_function_list!(impl_math_functions, Variable, |s: Variable| s.to_expr());
math_function_list!(impl_math_functions, Expr, |e: Expr| e);

/// Convenience function to create a Variable
pub fn sym(name: &str) -> Variable {
    Variable::new(name)
}

/// Create one variable per comma-separated name (`"x, y"` → `[x, y]`)
pub fn symbols(names: &str) -> Vec<Variable> {
    symbols_sep(names, ",")
}

/// Create one variable per `sep`-separated name; blank names are skipped
pub fn symbols_sep(names: &str, sep: &str) -> Vec<Variable> {
    names
        .split(sep)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(Variable::new)
        .collect()
}
