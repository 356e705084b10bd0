//! Evaluation Benchmark
//!
//! Parsing cost and repeated forward-mode evaluation over growing trees.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dual_diff::{Variable, bindings, parse};
use std::fmt::Write;
use std::hint::black_box;

// =============================================================================
// Expression Generator
// =============================================================================

/// Generates a sum of N mixed terms over `x`
fn generate_mixed(n: usize) -> String {
    let mut s = String::with_capacity(n * 32);
    for i in 1..=n {
        if i > 1 {
            s.push_str(if i % 2 == 0 { " + " } else { " - " });
        }
        let term = match i % 4 {
            0 => format!("{}*x^{}", i, i % 5 + 1),
            1 => format!("sin({}*x)*cos(x)", i),
            2 => format!("ln(x + {})", i),
            _ => format!("(x*x + {})/(x + {})", i, i),
        };
        let _ = write!(s, "{}", term);
    }
    s
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for n in [4, 16, 32, 256] {
        let formula = generate_mixed(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &formula, |b, f| {
            b.iter(|| parse(black_box(f)))
        });
    }
    group.finish();
}

fn bench_evaluate_and_differentiate(c: &mut Criterion) {
    let x = Variable::new("x");
    let env = bindings([("x", 1.7)]);

    let mut group = c.benchmark_group("evaluate_and_differentiate");
    for n in [4, 16, 32, 256] {
        let expr = parse(&generate_mixed(n)).expect("generated formula parses");
        group.bench_with_input(BenchmarkId::from_parameter(n), &expr, |b, e| {
            b.iter(|| e.evaluate_and_differentiate(black_box(Some(&x)), black_box(&env)))
        });
    }
    group.finish();

    // The two demonstration functions
    let mut group = c.benchmark_group("demo_functions");
    for (name, formula) in [
        ("wave", "cos(x)+sin(x*x/100)*x/50"),
        ("pole", "x*x+1/(sin(x)-1.05)"),
    ] {
        let expr = parse(formula).expect("demo formula parses");
        group.bench_function(name, |b| {
            b.iter(|| expr.evaluate_and_differentiate(Some(&x), black_box(&env)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_evaluate_and_differentiate);
criterion_main!(benches);
