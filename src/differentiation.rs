//! Forward-mode evaluation of expression trees
//!
//! Every node evaluates its children first (post-order) with the same target
//! and bindings, then combines their [`Dual`]s with its own rule. One pass
//! therefore produces the value and the derivative together.
//!
//! With no target variable every [`Variable`] reports an unbounded (`+∞`)
//! partial. Only the value of such a result is meaningful; [`Expr::evaluate`]
//! discards the partial.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::traits::{MathScalar, cast};
use crate::{DiffError, Dual, Expr, ExprKind, Variable};

/// Variable name to value at the evaluation point
pub type Bindings<T = f64> = FxHashMap<String, T>;

/// Build a [`Bindings`] map from `(name, value)` pairs
///
/// # Example
/// ```
/// use dual_diff::{Expr, bindings};
///
/// let env = bindings([("x", 2.0), ("y", 3.0)]);
/// let expr = Expr::variable("x") * Expr::variable("y");
/// assert_eq!(expr.evaluate(&env).unwrap(), 6.0);
/// ```
pub fn bindings<T, K, I>(pairs: I) -> Bindings<T>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, T)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

impl Variable {
    fn eval_dual<T: MathScalar>(
        &self,
        target: Option<&Variable>,
        bindings: &Bindings<T>,
    ) -> Result<Dual<T>, DiffError> {
        let value = match (bindings.get(self.name()), self.default_value()) {
            (Some(v), _) => *v,
            (None, Some(default)) => cast(default)?,
            (None, None) => {
                return Err(DiffError::UnresolvedValue {
                    name: self.name().to_string(),
                });
            }
        };

        let partial = match target {
            Some(t) if t == self => T::one(),
            Some(_) => T::zero(),
            None => T::infinity(),
        };

        Ok(Dual::new(value, partial))
    }
}

impl Expr {
    /// Evaluate the expression and its derivative with respect to `target`.
    ///
    /// # Errors
    /// - [`DiffError::UnresolvedValue`] if a variable has neither a binding
    ///   nor a default
    /// - [`DiffError::Domain`] for division by zero, a negative power base,
    ///   or a logarithm/trigonometric argument outside the real domain
    /// - [`DiffError::NonNumeric`] if a literal cannot be represented in `T`
    pub fn evaluate_and_differentiate<T: MathScalar>(
        &self,
        target: Option<&Variable>,
        bindings: &Bindings<T>,
    ) -> Result<Dual<T>, DiffError> {
        trace!(
            wrt = target.map(Variable::name),
            bound = bindings.len(),
            "evaluate_and_differentiate"
        );
        self.eval_dual(target, bindings)
    }

    /// Value of the expression at the point given by `bindings`
    pub fn evaluate<T: MathScalar>(&self, bindings: &Bindings<T>) -> Result<T, DiffError> {
        self.evaluate_and_differentiate(None, bindings)
            .map(|d| d.value())
    }

    /// Partial derivative with respect to `target` at the point given by `bindings`
    pub fn differentiate<T: MathScalar>(
        &self,
        target: &Variable,
        bindings: &Bindings<T>,
    ) -> Result<T, DiffError> {
        self.evaluate_and_differentiate(Some(target), bindings)
            .map(|d| d.partial())
    }

    fn eval_dual<T: MathScalar>(
        &self,
        target: Option<&Variable>,
        bindings: &Bindings<T>,
    ) -> Result<Dual<T>, DiffError> {
        let children = |l: &Expr, r: &Expr| eval_operands(l, r, target, bindings);

        match &self.kind {
            ExprKind::Constant(c) => Ok(Dual::constant(cast(*c)?)),

            ExprKind::Variable(v) => v.eval_dual(target, bindings),

            ExprKind::Add(l, r) => children(l.as_ref(), r.as_ref()).map(|(l, r)| l + r),

            ExprKind::Sub(l, r) => children(l.as_ref(), r.as_ref()).map(|(l, r)| l - r),

            ExprKind::Mul(l, r) => children(l.as_ref(), r.as_ref()).map(|(l, r)| l * r),

            ExprKind::Div(l, r) => {
                let (l, r) = children(l.as_ref(), r.as_ref())?;
                if r.value().is_zero() {
                    return Err(DiffError::domain(
                        "division",
                        format!("{} / 0 is undefined", l.value()),
                    ));
                }
                Ok(l / r)
            }

            ExprKind::Pow(l, r) => {
                let (l, r) = children(l.as_ref(), r.as_ref())?;
                if l.value() < T::zero() {
                    return Err(DiffError::domain(
                        "power",
                        format!(
                            "{} ^ {} has a negative base",
                            l.value(),
                            r.value()
                        ),
                    ));
                }
                // ln(0) in the variable-exponent rule
                if l.value().is_zero() && !r.partial().is_zero() {
                    return Err(DiffError::domain(
                        "power",
                        format!("0 ^ {} has no derivative in its exponent", r.value()),
                    ));
                }
                Ok(l.pow(r))
            }

            ExprKind::Function { func, arg } => func.apply(arg.eval_dual(target, bindings)?),
        }
    }
}

fn eval_operands<T: MathScalar>(
    l: &Expr,
    r: &Expr,
    target: Option<&Variable>,
    bindings: &Bindings<T>,
) -> Result<(Dual<T>, Dual<T>), DiffError> {
    Ok((l.eval_dual(target, bindings)?, r.eval_dual(target, bindings)?))
}
