//! Parser module - converts strings to expression trees
mod expr_builder;
mod lexer;
mod pratt;
mod syntax;
mod tokens;

use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, DiffError, Expr};
use expr_builder::ExpressionBuilder;
use tracing::debug;

/// Parse a formula string into an expression tree
///
/// The grammar is infix arithmetic (`+ - * /`, `^` or `**` for powers)
/// over numeric literals, variable names and calls of the registered
/// functions (see [`crate::functions::names`]). Function names are
/// case-insensitive; `log(x)` is the natural logarithm and `log(x, b)`
/// takes a literal base.
///
/// # Example
/// ```
/// use dual_diff::{bindings, parse};
///
/// let expr = parse("x^2 + sin(x)").unwrap();
/// let env = bindings([("x", 0.0)]);
/// assert_eq!(expr.evaluate(&env).unwrap(), 0.0);
/// ```
///
/// # Errors
/// Returns `DiffError` if:
/// - The input is empty
/// - The input contains an invalid character or malformed number
/// - Parentheses are unbalanced or an operand is missing
/// - The formula uses unary signs, implicit multiplication, an unknown
///   function, a wrong argument count or a non-literal logarithm base
/// - The tree exceeds [`DEFAULT_MAX_DEPTH`] or [`DEFAULT_MAX_NODES`]
pub fn parse(input: &str) -> Result<Expr, DiffError> {
    parse_with_limits(input, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES)
}

/// Pipeline: validate -> lex -> parse -> build -> check limits
pub(crate) fn parse_with_limits(
    input: &str,
    max_depth: usize,
    max_nodes: usize,
) -> Result<Expr, DiffError> {
    if input.trim().is_empty() {
        return Err(DiffError::EmptyFormula);
    }

    let tokens = lexer::lex(input)?;
    debug!(tokens = tokens.len(), "lexed formula");

    let syntax = pratt::parse_tokens(&tokens, max_depth)?;
    let expr = ExpressionBuilder.build(&syntax)?;

    let nodes = expr.node_count();
    let depth = expr.max_depth();
    debug!(nodes, depth, "built expression");

    if depth > max_depth {
        return Err(DiffError::MaxDepthExceeded);
    }
    if nodes > max_nodes {
        return Err(DiffError::MaxNodesExceeded);
    }

    Ok(expr)
}
