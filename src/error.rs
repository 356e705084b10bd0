use thiserror::Error;

/// Source location span for error reporting
/// Represents a range of characters in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single position
    pub fn at(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Smallest span covering both `self` and `other`
    pub fn join(self, other: Span) -> Self {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Format the span for display (1-indexed for users)
    pub fn display(&self) -> String {
        if !self.is_valid() {
            String::new()
        } else if self.end - self.start == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.end)
        }
    }
}

fn located(span: &Option<Span>) -> String {
    span.map_or(String::new(), |s| s.display())
}

/// Errors raised while parsing, building or evaluating an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiffError {
    // Lexing and parsing
    #[error("Formula cannot be empty")]
    EmptyFormula,

    #[error("Invalid number format: '{value}'{}", located(.span))]
    InvalidNumber { value: String, span: Option<Span> },

    #[error("Invalid token: '{token}'{}", located(.span))]
    InvalidToken { token: String, span: Option<Span> },

    #[error("Expected '{expected}', but got '{got}'{}", located(.span))]
    UnexpectedToken {
        expected: String,
        got: String,
        span: Option<Span>,
    },

    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    // Building
    #[error("Unsupported syntax: {construct}{}", located(.span))]
    UnsupportedSyntax {
        construct: String,
        span: Option<Span>,
    },

    #[error("Logarithm base must be a numeric literal{}", located(.span))]
    LogBaseNotLiteral { span: Option<Span> },

    // Evaluation
    #[error("Value of '{name}' must be bound or have a default")]
    UnresolvedValue { name: String },

    #[error("Domain error in {op}: {detail}")]
    Domain { op: &'static str, detail: String },

    #[error("Cannot represent {value} as a real number")]
    NonNumeric { value: String },

    // Safety limits
    #[error("Expression nesting depth exceeds maximum limit")]
    MaxDepthExceeded,

    #[error("Expression size exceeds maximum node count limit")]
    MaxNodesExceeded,
}

impl DiffError {
    /// Create UnsupportedSyntax with span
    pub fn unsupported_at(construct: impl Into<String>, span: Span) -> Self {
        DiffError::UnsupportedSyntax {
            construct: construct.into(),
            span: Some(span),
        }
    }

    pub(crate) fn domain(op: &'static str, detail: impl Into<String>) -> Self {
        DiffError::Domain {
            op,
            detail: detail.into(),
        }
    }

    /// True for errors raised before any evaluation takes place
    pub fn is_syntax_error(&self) -> bool {
        !matches!(
            self,
            DiffError::UnresolvedValue { .. }
                | DiffError::Domain { .. }
                | DiffError::NonNumeric { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_display() {
        assert_eq!(Span::at(0).display(), " at position 1");
        assert_eq!(Span::new(2, 5).display(), " at positions 3-5");
        assert_eq!(Span::default().display(), "");
        assert_eq!(Span::at(4).join(Span::new(1, 2)), Span::new(1, 5));
    }

    #[test]
    fn test_error_messages() {
        let err = DiffError::unsupported_at("unary minus", Span::at(0));
        assert_eq!(err.to_string(), "Unsupported syntax: unary minus at position 1");

        let err = DiffError::UnresolvedValue {
            name: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Value of 'x' must be bound or have a default");
        assert!(!err.is_syntax_error());
        assert!(DiffError::EmptyFormula.is_syntax_error());
    }
}
