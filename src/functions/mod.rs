//! Unary function nodes: the logarithm and trigonometric families
//!
//! [`Function`] is the closed set of functions an expression can apply to a
//! single operand. Its dual-number rules live in `definitions`, the name
//! table the parser dispatches through lives in `registry`.

pub(crate) mod definitions;
pub(crate) mod registry;

pub use registry::{FunctionDefinition, names};

/// A unary transcendental function
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Function {
    /// Logarithm with an explicit base
    Log(f64),
    /// Natural logarithm
    Ln,
    Log2,
    Log10,
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
}

impl Function {
    /// Canonical lower-case name, as accepted by the parser
    pub fn name(&self) -> &'static str {
        match self {
            Function::Log(_) => "log",
            Function::Ln => "ln",
            Function::Log2 => "log2",
            Function::Log10 => "log10",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Cot => "cot",
            Function::Sec => "sec",
            Function::Csc => "csc",
        }
    }

    /// Look up a single-argument function by (case-insensitive) name
    ///
    /// `log` and `logarithm` resolve to the natural logarithm here; use
    /// [`Function::Log`] directly for another base.
    pub fn from_name(name: &str) -> Option<Function> {
        let def = registry::Registry::get(&name.to_ascii_lowercase())?;
        def.arity.contains(&1).then(|| (def.make)(None))
    }

    /// Logarithm base, `None` for trigonometric functions
    pub fn base(&self) -> Option<f64> {
        match self {
            Function::Log(b) => Some(*b),
            Function::Ln => Some(std::f64::consts::E),
            Function::Log2 => Some(2.0),
            Function::Log10 => Some(10.0),
            _ => None,
        }
    }

    pub fn is_logarithm(&self) -> bool {
        self.base().is_some()
    }

    pub fn is_trigonometric(&self) -> bool {
        !self.is_logarithm()
    }
}
