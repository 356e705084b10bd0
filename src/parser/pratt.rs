use crate::parser::syntax::{SyntaxKind, SyntaxNode};
use crate::parser::tokens::{Operator, Spanned, Token};
use crate::{DiffError, Span};

/// Parse tokens into a syntax tree using Pratt parsing algorithm
///
/// `max_depth` bounds the recursion of the parser itself; every operand,
/// parenthesized group and call argument counts as one level.
pub(crate) fn parse_tokens(tokens: &[Spanned], max_depth: usize) -> Result<SyntaxNode, DiffError> {
    if tokens.is_empty() {
        return Err(DiffError::UnexpectedEndOfInput);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        max_depth,
    };

    let node = parser.parse_expr(0)?;

    // Whatever stopped the top-level loop must be a stray closer
    match parser.current() {
        None => Ok(node),
        Some(extra) => Err(DiffError::UnexpectedToken {
            expected: "end of input".to_string(),
            got: extra.token.to_user_string(),
            span: Some(extra.span),
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn current(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn unexpected(&self, expected: &str) -> DiffError {
        match self.current() {
            Some(t) => DiffError::UnexpectedToken {
                expected: expected.to_string(),
                got: t.token.to_user_string(),
                span: Some(t.span),
            },
            None => DiffError::UnexpectedEndOfInput,
        }
    }

    /// Consume a `)` and return its span
    fn expect_right_paren(&mut self) -> Result<Span, DiffError> {
        match self.current() {
            Some(Spanned {
                token: Token::RightParen,
                span,
            }) => {
                self.advance();
                Ok(*span)
            }
            _ => Err(self.unexpected(")")),
        }
    }

    fn parse_expr(&mut self, min_precedence: u8) -> Result<SyntaxNode, DiffError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(DiffError::MaxDepthExceeded);
        }

        // Parse left side (prefix)
        let mut left = self.parse_prefix()?;

        // Parse operators and right side (infix)
        while let Some(spanned) = self.current() {
            let op = match &spanned.token {
                Token::Operator(op) => *op,
                // Two operands side by side, e.g. "2x" or "(a)(b)"
                Token::Number(_) | Token::Identifier(_) | Token::LeftParen => {
                    return Err(DiffError::unsupported_at(
                        "implicit multiplication",
                        spanned.span,
                    ));
                }
                Token::RightParen | Token::Comma => break,
            };

            if op.precedence() < min_precedence {
                break;
            }

            left = self.parse_infix(left, op)?;
        }

        self.depth -= 1;
        Ok(left)
    }

    fn parse_arguments(&mut self) -> Result<Vec<SyntaxNode>, DiffError> {
        let mut args = Vec::new();

        if let Some(Spanned {
            token: Token::RightParen,
            ..
        }) = self.current()
        {
            return Ok(args); // Empty argument list
        }

        loop {
            args.push(self.parse_expr(0)?);

            match self.current().map(|s| &s.token) {
                Some(Token::Comma) => {
                    self.advance(); // consume ,
                }
                Some(Token::RightParen) => break,
                _ => return Err(self.unexpected(", or )")),
            }
        }

        Ok(args)
    }

    fn parse_prefix(&mut self) -> Result<SyntaxNode, DiffError> {
        let spanned = self.current().ok_or(DiffError::UnexpectedEndOfInput)?;
        let span = spanned.span;

        match &spanned.token {
            Token::Number(n) => {
                self.advance();
                Ok(SyntaxNode::new(SyntaxKind::Number(*n), span))
            }

            Token::Identifier(name) => {
                self.advance();

                // Check if this is a function call
                if let Some(Spanned {
                    token: Token::LeftParen,
                    ..
                }) = self.current()
                {
                    self.advance(); // consume (
                    let args = self.parse_arguments()?;
                    let close = self.expect_right_paren()?;

                    Ok(SyntaxNode::new(
                        SyntaxKind::Call {
                            name: name.clone(),
                            args,
                        },
                        span.join(close),
                    ))
                } else {
                    Ok(SyntaxNode::new(SyntaxKind::Identifier(name.clone()), span))
                }
            }

            Token::Operator(Operator::Minus) => {
                Err(DiffError::unsupported_at("unary minus", span))
            }

            Token::Operator(Operator::Plus) => Err(DiffError::unsupported_at("unary plus", span)),

            Token::LeftParen => {
                self.advance(); // consume (
                let mut inner = self.parse_expr(0)?;
                let close = self.expect_right_paren()?;
                inner.span = span.join(close);
                Ok(inner)
            }

            Token::Operator(_) | Token::RightParen | Token::Comma => {
                Err(self.unexpected("an operand"))
            }
        }
    }

    fn parse_infix(&mut self, left: SyntaxNode, op: Operator) -> Result<SyntaxNode, DiffError> {
        self.advance();

        // Right associative for power, left for others
        let next_precedence = if op.is_right_associative() {
            op.precedence()
        } else {
            op.precedence() + 1
        };

        let right = self.parse_expr(next_precedence)?;
        Ok(SyntaxNode::binary(op, left, right))
    }
}
