use crate::Span;

/// Infix operator symbols recognised by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    /// `^`
    Caret,
    /// `**`
    DoubleStar,
}

impl Operator {
    pub(crate) fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Caret => "^",
            Operator::DoubleStar => "**",
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Operator::Plus | Operator::Minus => 10,
            Operator::Star | Operator::Slash => 20,
            Operator::Caret | Operator::DoubleStar => 30,
        }
    }

    pub(crate) fn is_right_associative(&self) -> bool {
        matches!(self, Operator::Caret | Operator::DoubleStar)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Identifier(String),
    Operator(Operator),
    LeftParen,
    RightParen,
    Comma,
}

impl Token {
    /// Convert token to a user-friendly string for error messages
    pub(crate) fn to_user_string(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Identifier(s) => s.clone(),
            Token::Operator(op) => op.symbol().to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
            Token::Comma => ",".to_string(),
        }
    }
}

/// A token together with its location in the source text
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub span: Span,
}
