//! Maps the generic parse tree onto expression nodes
use crate::functions::registry::Registry;
use crate::parser::syntax::{SyntaxKind, SyntaxNode};
use crate::{DiffError, Expr};

type BinaryCtor = fn(Expr, Expr) -> Expr;

/// Operator symbol to node constructor
static OPERATORS: [(&str, BinaryCtor); 6] = [
    ("+", Expr::add_expr as BinaryCtor),
    ("-", Expr::sub_expr as BinaryCtor),
    ("*", Expr::mul_expr as BinaryCtor),
    ("/", Expr::div_expr as BinaryCtor),
    ("^", Expr::pow_expr as BinaryCtor),
    ("**", Expr::pow_expr as BinaryCtor),
];

fn operator(symbol: &str) -> Option<BinaryCtor> {
    OPERATORS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, ctor)| *ctor)
}

/// Rewrites a [`SyntaxNode`] tree into an [`Expr`] tree
pub(crate) struct ExpressionBuilder;

impl ExpressionBuilder {
    pub(crate) fn build(&self, node: &SyntaxNode) -> Result<Expr, DiffError> {
        match &node.kind {
            SyntaxKind::Number(n) => Ok(Expr::constant(*n)),

            SyntaxKind::Identifier(name) => Ok(Expr::variable(name)),

            SyntaxKind::Binary { op, lhs, rhs } => {
                let ctor = operator(op.symbol()).ok_or_else(|| {
                    DiffError::unsupported_at(format!("operator '{}'", op.symbol()), node.span)
                })?;
                Ok(ctor(self.build(lhs)?, self.build(rhs)?))
            }

            SyntaxKind::Call { name, args } => self.build_call(name, args, node),
        }
    }

    fn build_call(
        &self,
        name: &str,
        args: &[SyntaxNode],
        node: &SyntaxNode,
    ) -> Result<Expr, DiffError> {
        let lower = name.to_ascii_lowercase();
        let def = Registry::get(&lower).ok_or_else(|| {
            DiffError::unsupported_at(format!("unknown function '{}'", name), node.span)
        })?;

        if !def.validate_arity(args.len()) {
            return Err(DiffError::unsupported_at(
                format!(
                    "{}() takes {} argument(s), got {}",
                    def.name,
                    arity_text(def.arity.start(), def.arity.end()),
                    args.len()
                ),
                node.span,
            ));
        }

        let base = match args.get(1) {
            None => None,
            Some(base) => Some(base.as_number().ok_or(DiffError::LogBaseNotLiteral {
                span: Some(base.span),
            })?),
        };

        Ok(Expr::func((def.make)(base), self.build(&args[0])?))
    }
}

fn arity_text(min: &usize, max: &usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{} to {}", min, max)
    }
}
