use crate::{Bindings, DiffError, ExprKind, Function, Span, Variable, bindings, parse};

fn eval(input: &str, env: &Bindings) -> f64 {
    parse(input).unwrap().evaluate(env).unwrap()
}

fn construct_of(input: &str) -> String {
    match parse(input) {
        Err(DiffError::UnsupportedSyntax { construct, .. }) => construct,
        other => panic!("Expected UnsupportedSyntax for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_precedence_and_associativity() {
    let env: Bindings = Bindings::default();
    assert_eq!(eval("1 + 2 * 3", &env), 7.0);
    assert_eq!(eval("(1 + 2) * 3", &env), 9.0);
    assert_eq!(eval("10 - 4 - 3", &env), 3.0);
    assert_eq!(eval("16 / 4 / 2", &env), 2.0);
    assert_eq!(eval("2 ^ 3 ^ 2", &env), 512.0);
    assert_eq!(eval("2 * 3 ^ 2", &env), 18.0);
}

#[test]
fn test_double_star_is_power() {
    let env = bindings([("x", 3.0)]);
    assert_eq!(parse("x ** 2").unwrap(), parse("x ^ 2").unwrap());
    assert_eq!(eval("2 ** 3 ** 2", &env), 512.0);
    assert_eq!(eval("x**2", &env), 9.0);
}

#[test]
fn test_numbers() {
    let env: Bindings = Bindings::default();
    assert_eq!(eval(".5 + 1.25", &env), 1.75);
    assert_eq!(eval("2e3", &env), 2000.0);
    assert_eq!(eval("1.5E-1 * 10", &env), 1.5);
}

#[test]
fn test_function_names_case_insensitive() {
    let env = bindings([("x", 0.0)]);
    assert_eq!(eval("SIN(x) + Cos(x)", &env), 1.0);
    assert_eq!(parse("LOG10(x)").unwrap(), parse("log10(x)").unwrap());
}

#[test]
fn test_reciprocal_trig_parse() {
    for (name, func) in [
        ("sec", Function::Sec),
        ("csc", Function::Csc),
        ("cot", Function::Cot),
    ] {
        let expr = parse(&format!("{}(x)", name)).unwrap();
        match &expr.kind {
            ExprKind::Function { func: f, .. } => assert_eq!(*f, func),
            other => panic!("Expected Function, got {:?}", other),
        }
    }
}

#[test]
fn test_logarithm_forms() {
    let env = bindings([("x", 8.0)]);
    assert_eq!(eval("log(x, 2)", &env), 3.0);
    assert_eq!(eval("logarithm(x, 2)", &env), 3.0);
    assert_eq!(eval("log(x)", &env), 8.0_f64.ln());
    assert_eq!(eval("ln(x)", &env), 8.0_f64.ln());
    assert_eq!(eval("log2(x)", &env), 3.0);

    let slope = parse("log(x, 2)")
        .unwrap()
        .differentiate(&Variable::new("x"), &env)
        .unwrap();
    assert!((slope - 1.0 / (8.0 * std::f64::consts::LN_2)).abs() < 1e-12);
}

#[test]
fn test_non_literal_log_base() {
    assert!(matches!(
        parse("log(x, y)"),
        Err(DiffError::LogBaseNotLiteral { .. })
    ));
    assert!(matches!(
        parse("log(x, (2))"),
        Ok(_)
    ));
}

#[test]
fn test_unknown_function() {
    assert_eq!(construct_of("exp(x)"), "unknown function 'exp'");
    assert_eq!(construct_of("f(x)"), "unknown function 'f'");
}

#[test]
fn test_wrong_arity() {
    assert!(construct_of("sin(x, y)").starts_with("sin() takes 1 argument(s)"));
    assert!(construct_of("log(x, 2, 3)").starts_with("log() takes 1 to 2 argument(s)"));
    assert!(construct_of("cos()").ends_with("got 0"));
}

#[test]
fn test_unary_minus_rejected() {
    assert_eq!(construct_of("-x"), "unary minus");
    assert_eq!(construct_of("2 * -x"), "unary minus");
    assert_eq!(construct_of("+x"), "unary plus");
}

#[test]
fn test_implicit_multiplication_rejected() {
    assert_eq!(construct_of("2x"), "implicit multiplication");
    assert_eq!(construct_of("2 sin(x)"), "implicit multiplication");
    assert_eq!(construct_of("(x + 1)(x - 1)"), "implicit multiplication");
}

#[test]
fn test_syntax_errors() {
    assert_eq!(parse(""), Err(DiffError::EmptyFormula));
    assert_eq!(parse("   "), Err(DiffError::EmptyFormula));
    assert_eq!(parse("x +"), Err(DiffError::UnexpectedEndOfInput));
    assert_eq!(parse("sin(x"), Err(DiffError::UnexpectedEndOfInput));
    assert!(matches!(parse("x )"), Err(DiffError::UnexpectedToken { .. })));
    assert!(matches!(parse("1..2"), Err(DiffError::InvalidNumber { .. })));
    assert_eq!(
        parse("x & y"),
        Err(DiffError::InvalidToken {
            token: "&".to_string(),
            span: Some(Span::at(2)),
        })
    );
}

#[test]
fn test_errors_are_syntax_errors() {
    for input in ["", "-x", "2x", "log(x, y)", "x +", "exp(x)", "x $"] {
        let err = parse(input).unwrap_err();
        assert!(err.is_syntax_error(), "{:?}: {}", input, err);
    }
}

#[test]
fn test_error_message_has_position() {
    let err = parse("x * -y").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported syntax: unary minus at position 5");
}

#[test]
fn test_display_reparses() {
    let inputs = [
        "x * x + 1",
        "(x + 1) * (y - 2)",
        "x - (y - z)",
        "2 ^ 3 ^ x",
        "(2 ^ 3) ^ x",
        "log(x + 1, 3) / sec(y)",
        "cos(ln(x + 10) - x)",
    ];
    let env = bindings([("x", 1.5), ("y", 0.25), ("z", 2.0)]);
    for input in inputs {
        let expr = parse(input).unwrap();
        let reparsed = parse(&expr.to_string()).unwrap();
        assert_eq!(expr, reparsed, "{} -> {}", input, expr);
        assert_eq!(expr.evaluate(&env).unwrap(), reparsed.evaluate(&env).unwrap());
    }
}

#[test]
fn test_tree_introspection() {
    let expr = parse("x * y + sin(x)").unwrap();
    assert_eq!(expr.node_count(), 6);
    assert_eq!(expr.max_depth(), 3);
    let mut vars: Vec<String> = expr.variables().into_iter().collect();
    vars.sort();
    assert_eq!(vars, ["x", "y"]);
    assert!(expr.contains_var("y"));
    assert!(!expr.contains_var("z"));
}
