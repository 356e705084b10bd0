//! Expression tree for forward-mode differentiation
//!
//! Trees are immutable: every constructor allocates a new node and children
//! are reference counted, so a sub-tree (typically a [`Variable`]) can be
//! shared by several parents and the whole tree can cross threads.

use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::functions::Function;

/// A named leaf with an optional default value.
///
/// Two variables are equal iff their names match; the default plays no part
/// in equality or hashing.
#[derive(Debug, Clone)]
pub struct Variable {
    name: Arc<str>,
    default: Option<f64>,
}

impl Variable {
    /// Create a variable with no default; evaluating it requires a binding
    pub fn new(name: impl AsRef<str>) -> Self {
        Variable {
            name: Arc::from(name.as_ref()),
            default: None,
        }
    }

    /// Create a variable that falls back to `default` when left unbound
    pub fn with_default(name: impl AsRef<str>, default: f64) -> Self {
        Variable {
            name: Arc::from(name.as_ref()),
            default: Some(default),
        }
    }

    /// Get the name of the variable
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> Option<f64> {
        self.default
    }

    /// Convert to an Expr leaf
    pub fn to_expr(&self) -> Expr {
        Expr::new(ExprKind::Variable(self.clone()))
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl AsRef<str> for Variable {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
}

impl Deref for Expr {
    type Target = ExprKind;

    fn deref(&self) -> &Self::Target {
        &self.kind
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Fixed real number (e.g., 2.75, 1e10)
    Constant(f64),

    /// Named operand
    Variable(Variable),

    // Binary operations
    /// Addition
    Add(Arc<Expr>, Arc<Expr>),

    /// Subtraction
    Sub(Arc<Expr>, Arc<Expr>),

    /// Multiplication
    Mul(Arc<Expr>, Arc<Expr>),

    /// Division
    Div(Arc<Expr>, Arc<Expr>),

    /// Exponentiation
    Pow(Arc<Expr>, Arc<Expr>),

    /// Unary function application
    Function { func: Function, arg: Arc<Expr> },
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr { kind }
    }

    // Accessor methods

    /// Return the value if this is a constant leaf
    pub fn as_constant(&self) -> Option<f64> {
        match &self.kind {
            ExprKind::Constant(n) => Some(*n),
            _ => None,
        }
    }

    /// Return the variable if this is a variable leaf
    pub fn as_variable(&self) -> Option<&Variable> {
        match &self.kind {
            ExprKind::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Left and right children of a binary operator node
    pub fn operands(&self) -> Option<(&Expr, &Expr)> {
        match &self.kind {
            ExprKind::Add(l, r)
            | ExprKind::Sub(l, r)
            | ExprKind::Mul(l, r)
            | ExprKind::Div(l, r)
            | ExprKind::Pow(l, r) => Some((l.as_ref(), r.as_ref())),
            _ => None,
        }
    }

    // Convenience constructors

    /// Create a constant leaf
    pub fn constant(n: f64) -> Self {
        Expr::new(ExprKind::Constant(n))
    }

    /// Create a variable leaf with no default
    pub fn variable(name: impl AsRef<str>) -> Self {
        Variable::new(name).to_expr()
    }

    /// Create an addition expression
    pub fn add_expr(left: Expr, right: Expr) -> Self {
        Expr::new(ExprKind::Add(Arc::new(left), Arc::new(right)))
    }

    /// Create a subtraction expression
    pub fn sub_expr(left: Expr, right: Expr) -> Self {
        Expr::new(ExprKind::Sub(Arc::new(left), Arc::new(right)))
    }

    /// Create a multiplication expression
    pub fn mul_expr(left: Expr, right: Expr) -> Self {
        Expr::new(ExprKind::Mul(Arc::new(left), Arc::new(right)))
    }

    /// Create a division expression
    pub fn div_expr(left: Expr, right: Expr) -> Self {
        Expr::new(ExprKind::Div(Arc::new(left), Arc::new(right)))
    }

    /// Create a power expression
    pub fn pow_expr(base: Expr, exponent: Expr) -> Self {
        Expr::new(ExprKind::Pow(Arc::new(base), Arc::new(exponent)))
    }

    /// Create a function application
    pub fn func(func: Function, arg: Expr) -> Self {
        Expr::new(ExprKind::Function {
            func,
            arg: Arc::new(arg),
        })
    }

    /// Create a logarithm of `arg` in the given base
    pub fn logarithm(arg: Expr, base: f64) -> Self {
        Expr::func(Function::Log(base), arg)
    }

    // Analysis methods

    /// Count the total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match &self.kind {
            ExprKind::Constant(_) | ExprKind::Variable(_) => 1,
            ExprKind::Function { arg, .. } => 1 + arg.node_count(),
            ExprKind::Add(l, r)
            | ExprKind::Sub(l, r)
            | ExprKind::Mul(l, r)
            | ExprKind::Div(l, r)
            | ExprKind::Pow(l, r) => 1 + l.node_count() + r.node_count(),
        }
    }

    /// Get the maximum nesting depth of the tree
    pub fn max_depth(&self) -> usize {
        match &self.kind {
            ExprKind::Constant(_) | ExprKind::Variable(_) => 1,
            ExprKind::Function { arg, .. } => 1 + arg.max_depth(),
            ExprKind::Add(l, r)
            | ExprKind::Sub(l, r)
            | ExprKind::Mul(l, r)
            | ExprKind::Div(l, r)
            | ExprKind::Pow(l, r) => 1 + l.max_depth().max(r.max_depth()),
        }
    }

    /// Check if the expression contains a specific variable
    pub fn contains_var(&self, var: &str) -> bool {
        match &self.kind {
            ExprKind::Constant(_) => false,
            ExprKind::Variable(v) => v.name() == var,
            ExprKind::Function { arg, .. } => arg.contains_var(var),
            ExprKind::Add(l, r)
            | ExprKind::Sub(l, r)
            | ExprKind::Mul(l, r)
            | ExprKind::Div(l, r)
            | ExprKind::Pow(l, r) => l.contains_var(var) || r.contains_var(var),
        }
    }

    /// Collect the names of all variables in the expression
    pub fn variables(&self) -> FxHashSet<String> {
        let mut vars = FxHashSet::default();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut FxHashSet<String>) {
        match &self.kind {
            ExprKind::Variable(v) => {
                if !vars.contains(v.name()) {
                    vars.insert(v.name().to_string());
                }
            }
            ExprKind::Function { arg, .. } => arg.collect_variables(vars),
            ExprKind::Add(l, r)
            | ExprKind::Sub(l, r)
            | ExprKind::Mul(l, r)
            | ExprKind::Div(l, r)
            | ExprKind::Pow(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
            ExprKind::Constant(_) => {}
        }
    }
}
