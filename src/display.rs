// Display formatting for expression trees
use crate::functions::Function;
use crate::{Expr, ExprKind};
use std::fmt;

/// Binding strength used to decide where parentheses are required
fn precedence(expr: &Expr) -> u8 {
    match &expr.kind {
        ExprKind::Add(..) | ExprKind::Sub(..) => 1,
        ExprKind::Mul(..) | ExprKind::Div(..) => 2,
        ExprKind::Pow(..) => 3,
        ExprKind::Constant(n) if *n < 0.0 => 0,
        ExprKind::Constant(_) | ExprKind::Variable(_) | ExprKind::Function { .. } => 4,
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, needs_parens: bool) -> fmt::Result {
    if needs_parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e10 {
        // Display as integer if no fractional part
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = precedence(self);
        match &self.kind {
            ExprKind::Constant(n) => write!(f, "{}", format_number(*n)),

            ExprKind::Variable(v) => write!(f, "{}", v.name()),

            ExprKind::Function { func, arg } => match func {
                Function::Log(base) => write!(f, "log({}, {})", arg, format_number(*base)),
                _ => write!(f, "{}({})", func.name(), arg),
            },

            // Left-associative: the right operand needs parentheses at equal precedence
            // so the printed form re-parses to the same tree. Negative constants
            // print as `(-c)`, which the parser rejects as unary minus.
            ExprKind::Add(l, r)
            | ExprKind::Sub(l, r)
            | ExprKind::Mul(l, r)
            | ExprKind::Div(l, r) => {
                let symbol = match &self.kind {
                    ExprKind::Add(..) => "+",
                    ExprKind::Sub(..) => "-",
                    ExprKind::Mul(..) => "*",
                    _ => "/",
                };
                write_operand(f, l, precedence(l) < prec)?;
                write!(f, " {} ", symbol)?;
                write_operand(f, r, precedence(r) <= prec)
            }

            // Right-associative: the base needs parentheses at equal precedence
            ExprKind::Pow(l, r) => {
                write_operand(f, l, precedence(l) <= prec)?;
                write!(f, "^")?;
                write_operand(f, r, precedence(r) < prec)
            }
        }
    }
}

impl fmt::Display for crate::Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
