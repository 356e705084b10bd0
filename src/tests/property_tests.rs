//! Quickcheck properties: parser robustness on arbitrary text, and the
//! differentiation rules checked at random points

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

use crate::{Variable, bindings, parse};

/// A well-formed formula over `x`, `y` and `z`, at most four levels deep
fn random_formula(g: &mut Gen) -> String {
    formula_of_depth(g, g.size().min(4))
}

fn formula_of_depth(g: &mut Gen, depth: usize) -> String {
    if depth == 0 {
        let choice: u8 = u8::arbitrary(g) % 4;
        match choice {
            0 => {
                let n: f64 = f64::arbitrary(g);
                if n.is_finite() && n.abs() < 1e10 {
                    format!("{:.4}", n.abs())
                } else {
                    "1.0".to_string()
                }
            }
            1 => "x".to_string(),
            2 => "y".to_string(),
            _ => "z".to_string(),
        }
    } else {
        let choice: u8 = u8::arbitrary(g) % 10;
        match choice {
            0..=3 => {
                let ops = ["+", "-", "*", "/", "^", "**"];
                let op = ops[usize::arbitrary(g) % ops.len()];
                let left = formula_of_depth(g, depth - 1);
                let right = formula_of_depth(g, depth - 1);
                format!("({} {} {})", left, op, right)
            }
            4..=6 => {
                let fns = ["sin", "cos", "tan", "cot", "sec", "csc", "ln", "log2", "log10"];
                let f = fns[usize::arbitrary(g) % fns.len()];
                let arg = formula_of_depth(g, depth - 1);
                format!("{}({})", f, arg)
            }
            7 => {
                let arg = formula_of_depth(g, depth - 1);
                format!("log({}, 3)", arg)
            }
            _ => formula_of_depth(g, depth - 1),
        }
    }
}

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON || (a - b).abs() < EPSILON * a.abs().max(b.abs())
}

mod parser_fuzz_tests {
    use super::*;

    #[test]
    fn test_parser_never_panics_on_random_input() {
        fn prop_parser_no_panic(input: String) -> TestResult {
            let _ = parse(&input);
            TestResult::passed()
        }
        QuickCheck::new()
            .tests(1000)
            .max_tests(2000)
            .quickcheck(prop_parser_no_panic as fn(String) -> TestResult);
    }

    /// Printing a parsed formula and parsing it again gives the same tree
    #[test]
    fn test_generated_expressions_parse() {
        fn prop_valid_expr_parses() -> bool {
            let mut g = Gen::new(10);
            let formula = random_formula(&mut g);
            match parse(&formula) {
                Ok(expr) => parse(&expr.to_string()).is_ok_and(|again| again == expr),
                Err(_) => false,
            }
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop_valid_expr_parses as fn() -> bool);
    }

    #[test]
    fn test_parser_edge_cases() {
        let edge_cases = [
            "",
            "   ",
            "()",
            "((()))",
            "+++",
            "---x",
            "1+",
            "+1",
            "sin()",
            "sin(x,y)",
            "1..2",
            "1e999999",
            "1e-999999",
            "x^y^z",
            "((((x))))",
            "sin(cos(tan(ln(x))))",
            "x+y*z^w/a-b",
            "1/0",
            "0/0",
            "log(,)",
            "log(x,)",
            "x**",
            "****",
            "∞", // Unicode
            "π",
            "2x",
            "x * (-2)",
            "log(x, y)",
            "cot(0) + csc(0)",
        ];

        for case in &edge_cases {
            let _ = parse(case);
        }
    }

    /// Deep nesting fails cleanly instead of overflowing the stack
    #[test]
    fn test_parser_deep_nesting() {
        let deep = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(parse(&deep).is_err());

        let mut expr = "x".to_string();
        for _ in 0..40 {
            expr = format!("({}+1)", expr);
        }
        let result = parse(&expr);
        assert!(result.is_ok(), "Nesting should parse: {:?}", result);
    }
}

mod differentiation_property_tests {
    use super::*;

    /// Property: d/dx (x * x) = 2x
    #[test]
    fn test_square_derivative() {
        fn prop_square(x_val: f64) -> TestResult {
            if !x_val.is_finite() || x_val.abs() > 1e100 {
                return TestResult::discard();
            }
            let expr = parse("x * x").unwrap();
            let d = expr
                .differentiate(&Variable::new("x"), &bindings([("x", x_val)]))
                .unwrap();
            TestResult::from_bool(d == 2.0 * x_val)
        }
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_square as fn(f64) -> TestResult);
    }

    /// Property: (f + g)' = f' + g'
    #[test]
    fn test_sum_rule() {
        fn prop_sum(x_val: f64) -> TestResult {
            if !x_val.is_finite() || x_val.abs() > 1e3 {
                return TestResult::discard();
            }
            // x^3 needs a non-negative base
            let x_val = x_val.abs();
            let x = Variable::new("x");
            let env = bindings([("x", x_val)]);
            let f = parse("sin(x) * x").unwrap();
            let g = parse("cos(x / 2) + x^3").unwrap();
            let sum = parse("sin(x) * x + (cos(x / 2) + x^3)").unwrap();

            let lhs = sum.differentiate(&x, &env).unwrap();
            let rhs = f.differentiate(&x, &env).unwrap() + g.differentiate(&x, &env).unwrap();
            TestResult::from_bool(approx_eq(lhs, rhs))
        }
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_sum as fn(f64) -> TestResult);
    }

    /// Property: derivative matches a central finite difference
    #[test]
    fn test_matches_finite_difference() {
        fn prop_fd(seed: u16) -> TestResult {
            let x_val = 0.5 + f64::from(seed % 1000) / 400.0;
            let x = Variable::new("x");
            let expr = parse("ln(x + 1) * cos(x) + x^x / 3").unwrap();
            let h = 1e-6;
            let at = |v: f64| expr.evaluate(&bindings([("x", v)])).unwrap();
            let numeric = (at(x_val + h) - at(x_val - h)) / (2.0 * h);
            let exact = expr.differentiate(&x, &bindings([("x", x_val)])).unwrap();
            TestResult::from_bool((numeric - exact).abs() < 1e-5 * exact.abs().max(1.0))
        }
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_fd as fn(u16) -> TestResult);
    }

    /// Property: evaluation is deterministic
    #[test]
    fn test_evaluation_is_deterministic() {
        fn prop_deterministic(x_val: f64, y_val: f64) -> TestResult {
            if !x_val.is_finite() || !y_val.is_finite() {
                return TestResult::discard();
            }
            let expr = parse("x * y + sin(x) - cos(y) * x").unwrap();
            let env = bindings([("x", x_val), ("y", y_val)]);
            let target = Variable::new("y");
            let a = expr.evaluate_and_differentiate(Some(&target), &env);
            let b = expr.evaluate_and_differentiate(Some(&target), &env);
            match (a, b) {
                (Ok(a), Ok(b)) => TestResult::from_bool(
                    a.value().to_bits() == b.value().to_bits()
                        && a.partial().to_bits() == b.partial().to_bits(),
                ),
                (a, b) => TestResult::from_bool(a == b),
            }
        }
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_deterministic as fn(f64, f64) -> TestResult);
    }
}
