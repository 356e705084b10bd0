use crate::traits::MathScalar;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value/derivative pair propagated through forward-mode differentiation.
///
/// `partial` is the derivative with respect to whichever variable the
/// producing evaluation call targeted. The rules below carry no domain
/// checks; those live with the expression nodes that call them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dual<T: MathScalar = f64> {
    val: T,
    eps: T,
}

impl<T: MathScalar> Dual<T> {
    pub fn new(value: T, partial: T) -> Self {
        Self {
            val: value,
            eps: partial,
        }
    }

    pub fn constant(value: T) -> Self {
        Self {
            val: value,
            eps: T::zero(),
        }
    }

    /// The expression's value at the evaluation point
    #[inline]
    pub fn value(&self) -> T {
        self.val
    }

    /// The derivative with respect to the evaluation target
    #[inline]
    pub fn partial(&self) -> T {
        self.eps
    }

    /// Generalized power rule: d(u^v) = u^v * (u'v/u + ln(u) v').
    ///
    /// A constant exponent (`v' == 0`) uses `v u^(v-1) u'`, which agrees with
    /// the general form for `u > 0` and stays finite at `u == 0`. With
    /// `v' != 0` the base must be nonzero; callers check that.
    pub fn pow(self, exponent: Self) -> Self {
        let val = self.val.powf(exponent.val);
        let eps = if exponent.eps.is_zero() {
            if self.eps.is_zero() || exponent.val.is_zero() {
                T::zero()
            } else {
                exponent.val * self.val.powf(exponent.val - T::one()) * self.eps
            }
        } else {
            val * (self.eps * exponent.val / self.val + self.val.ln() * exponent.eps)
        };
        Self::new(val, eps)
    }

    pub fn ln(self) -> Self {
        Self::new(self.val.ln(), self.eps / self.val)
    }

    pub fn log(self, base: T) -> Self {
        Self::new(self.val.log(base), self.eps / (base.ln() * self.val))
    }

    pub fn log2(self) -> Self {
        Self::new(self.val.log2(), self.eps / (T::LN_2() * self.val))
    }

    pub fn log10(self) -> Self {
        Self::new(self.val.log10(), self.eps / (T::LN_10() * self.val))
    }

    // Trig

    pub fn sin(self) -> Self {
        Self::new(self.val.sin(), self.eps * self.val.cos())
    }

    pub fn cos(self) -> Self {
        Self::new(self.val.cos(), -self.eps * self.val.sin())
    }

    pub fn tan(self) -> Self {
        let sec = self.val.cos().recip();
        Self::new(self.val.tan(), self.eps * sec * sec)
    }

    pub fn cot(self) -> Self {
        let csc = self.val.sin().recip();
        Self::new(self.val.tan().recip(), -self.eps * csc * csc)
    }

    pub fn sec(self) -> Self {
        let sec = self.val.cos().recip();
        Self::new(sec, self.eps * sec * self.val.tan())
    }

    pub fn csc(self) -> Self {
        let csc = self.val.sin().recip();
        let cot = self.val.tan().recip();
        Self::new(csc, -self.eps * csc * cot)
    }
}

impl<T: MathScalar> fmt::Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.val, self.eps)
    }
}

// Basic Arithmetic

impl<T: MathScalar> Add for Dual<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.val + rhs.val, self.eps + rhs.eps)
    }
}

impl<T: MathScalar> Sub for Dual<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.val - rhs.val, self.eps - rhs.eps)
    }
}

impl<T: MathScalar> Mul for Dual<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // Product rule
        Self::new(self.val * rhs.val, self.eps * rhs.val + self.val * rhs.eps)
    }
}

impl<T: MathScalar> Div for Dual<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        // Quotient rule
        let val = self.val / rhs.val;
        let eps = (self.eps * rhs.val - self.val * rhs.eps) / (rhs.val * rhs.val);
        Self::new(val, eps)
    }
}

impl<T: MathScalar> Neg for Dual<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.val, -self.eps)
    }
}
