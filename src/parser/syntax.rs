//! Generic parse tree produced by the Pratt parser
//!
//! The tree knows nothing about evaluation: calls carry their raw name and
//! argument list, operators carry their token. `ExpressionBuilder` maps it
//! onto [`Expr`](crate::Expr) nodes.

use crate::Span;
use crate::parser::tokens::Operator;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SyntaxKind {
    Number(f64),
    Identifier(String),
    Binary {
        op: Operator,
        lhs: Box<SyntaxNode>,
        rhs: Box<SyntaxNode>,
    },
    Call {
        name: String,
        args: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    pub(crate) fn new(kind: SyntaxKind, span: Span) -> Self {
        SyntaxNode { kind, span }
    }

    pub(crate) fn binary(op: Operator, lhs: SyntaxNode, rhs: SyntaxNode) -> Self {
        let span = lhs.span.join(rhs.span);
        SyntaxNode::new(
            SyntaxKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            span,
        )
    }

    /// The literal value, if this node is a number
    pub(crate) fn as_number(&self) -> Option<f64> {
        match self.kind {
            SyntaxKind::Number(n) => Some(n),
            _ => None,
        }
    }
}
