//! Builder pattern API for parsing and evaluation
//!
//! Provides a fluent interface for configuring safety limits and running
//! formulas given as text.

use crate::traits::MathScalar;
use crate::{
    Bindings, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, DiffError, Dual, Expr, Variable, parser,
};

/// Builder for differentiation operations
///
/// # Example
/// ```
/// use dual_diff::{Bindings, Diff, bindings};
///
/// let at: Bindings = bindings([("x", 2.0)]);
/// let slope = Diff::new()
///     .max_depth(20)
///     .differentiate_str("x^3 + 2*x", "x", &at)
///     .unwrap();
/// assert!((slope - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Diff {
    max_depth: Option<usize>,
    max_nodes: Option<usize>,
}

impl Diff {
    /// Create a new differentiation builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum AST depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set maximum AST node count
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    fn depth_limit(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    fn node_limit(&self) -> usize {
        self.max_nodes.unwrap_or(DEFAULT_MAX_NODES)
    }

    /// Parse a formula under this builder's limits
    pub fn parse(&self, formula: &str) -> Result<Expr, DiffError> {
        parser::parse_with_limits(formula, self.depth_limit(), self.node_limit())
    }

    /// Check an already-built expression against the configured limits
    pub fn check_limits(&self, expr: &Expr) -> Result<(), DiffError> {
        if expr.max_depth() > self.depth_limit() {
            return Err(DiffError::MaxDepthExceeded);
        }
        if expr.node_count() > self.node_limit() {
            return Err(DiffError::MaxNodesExceeded);
        }
        Ok(())
    }

    /// Evaluate a hand-built expression after checking the limits
    pub fn evaluate_and_differentiate<T: MathScalar>(
        &self,
        expr: &Expr,
        target: Option<&Variable>,
        bindings: &Bindings<T>,
    ) -> Result<Dual<T>, DiffError> {
        self.check_limits(expr)?;
        expr.evaluate_and_differentiate(target, bindings)
    }

    /// Parse `formula` and return its value and its derivative with
    /// respect to the variable named `var` (if any)
    pub fn evaluate_and_differentiate_str<T: MathScalar>(
        &self,
        formula: &str,
        var: Option<&str>,
        bindings: &Bindings<T>,
    ) -> Result<Dual<T>, DiffError> {
        let expr = self.parse(formula)?;
        let target = var.map(Variable::new);
        expr.evaluate_and_differentiate(target.as_ref(), bindings)
    }

    /// Parse and evaluate a formula
    pub fn evaluate_str<T: MathScalar>(
        &self,
        formula: &str,
        bindings: &Bindings<T>,
    ) -> Result<T, DiffError> {
        self.evaluate_and_differentiate_str(formula, None, bindings)
            .map(|d| d.value())
    }

    /// Parse a formula and differentiate it with respect to `var`
    pub fn differentiate_str<T: MathScalar>(
        &self,
        formula: &str,
        var: &str,
        bindings: &Bindings<T>,
    ) -> Result<T, DiffError> {
        self.evaluate_and_differentiate_str(formula, Some(var), bindings)
            .map(|d| d.partial())
    }
}
