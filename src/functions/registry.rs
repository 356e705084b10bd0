use super::Function;
use rustc_hash::FxHashMap;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

/// A name the expression builder accepts in call position
#[derive(Clone)]
pub struct FunctionDefinition {
    /// Lower-case name as written in a formula (e.g., "sin", "log10")
    pub name: &'static str,

    /// Acceptable argument count (arity)
    pub arity: RangeInclusive<usize>,

    /// Build the function; receives the literal base of a two-argument call
    pub make: fn(Option<f64>) -> Function,
}

impl FunctionDefinition {
    /// Helper to check if argument count is valid
    pub fn validate_arity(&self, args: usize) -> bool {
        self.arity.contains(&args)
    }
}

fn unary(name: &'static str, make: fn(Option<f64>) -> Function) -> FunctionDefinition {
    FunctionDefinition {
        name,
        arity: 1..=1,
        make,
    }
}

fn logarithm(base: Option<f64>) -> Function {
    base.map_or(Function::Ln, Function::Log)
}

fn all_definitions() -> Vec<FunctionDefinition> {
    vec![
        // Logarithms: log(x) and logarithm(x) are natural, log(x, b) takes a base
        FunctionDefinition {
            name: "log",
            arity: 1..=2,
            make: logarithm,
        },
        FunctionDefinition {
            name: "logarithm",
            arity: 1..=2,
            make: logarithm,
        },
        unary("ln", |_| Function::Ln),
        unary("log2", |_| Function::Log2),
        unary("log10", |_| Function::Log10),
        // Trigonometric
        unary("sin", |_| Function::Sin),
        unary("cos", |_| Function::Cos),
        unary("tan", |_| Function::Tan),
        unary("cot", |_| Function::Cot),
        unary("sec", |_| Function::Sec),
        unary("csc", |_| Function::Csc),
    ]
}

/// Static registry storing all function definitions
static REGISTRY: OnceLock<FxHashMap<&'static str, FunctionDefinition>> = OnceLock::new();

fn init_registry() -> FxHashMap<&'static str, FunctionDefinition> {
    all_definitions()
        .into_iter()
        .map(|def| (def.name, def))
        .collect()
}

/// Central registry for getting function definitions
pub(crate) struct Registry;

impl Registry {
    /// Get a function definition by lower-case name
    pub(crate) fn get(name: &str) -> Option<&'static FunctionDefinition> {
        REGISTRY.get_or_init(init_registry).get(name)
    }
}

/// Every function name the parser accepts, sorted
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.get_or_init(init_registry).keys().copied().collect();
    names.sort_unstable();
    names
}
