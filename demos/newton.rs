/// Timing and Newton-Raphson demonstration
///
/// Samples two functions and their derivatives over a grid, then finds two
/// roots of a third function with a damped Newton-Raphson iteration.
///
/// Run with: cargo run --example newton
/// Set RUST_LOG=dual_diff=trace to watch every evaluation.
use dual_diff::{DiffError, Dual, Expr, Variable, bindings, parse, sym};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const SAMPLES: usize = 10_000;
const THRESHOLD: f64 = 1e-10;
const ALPHA: f64 = 0.8;
const MAX_STEPS: usize = 500;

fn main() -> Result<(), DiffError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let x = sym("x");

    // =========================================================================
    // DEMO 1: tree built with operators
    // =========================================================================
    let start = Instant::now();
    let wave = x.clone().cos() + (x.clone() * x.clone() / 100.0).sin() * x.clone() / 50.0;
    let points = sample(&wave, &x, (-30.0, 100.0))?;
    report("demo1", &wave, &points, start);

    // =========================================================================
    // DEMO 2: tree parsed from text
    // =========================================================================
    let start = Instant::now();
    let pole = parse("x*x+1/(sin(x)-1.05)")?;
    let points = sample(&pole, &x, (-5.0, 5.0))?;
    report("demo2", &pole, &points, start);

    // =========================================================================
    // DEMO 3: damped Newton-Raphson
    // =========================================================================
    let start = Instant::now();
    let f = parse("4*x - x*x + 10*sin(x) + cos(ln(x+10)-x) + 10")?;
    println!("f(x) = {}", f);
    for x0 in [0.0, 2.0] {
        match newton(&f, &x, x0)? {
            Some(root) => println!("root from x0 = {}: {:.15}", x0, root),
            None => println!("no convergence from x0 = {} in {} steps", x0, MAX_STEPS),
        }
    }
    let points = sample(&f, &x, (-5.0, 8.0))?;
    report("demo3", &f, &points, start);

    Ok(())
}

/// Evaluate `expr` and its derivative at evenly spaced points in `range`
fn sample(expr: &Expr, x: &Variable, range: (f64, f64)) -> Result<Vec<Dual>, DiffError> {
    let (lo, hi) = range;
    let step = (hi - lo) / (SAMPLES - 1) as f64;
    (0..SAMPLES)
        .map(|i| {
            let at = bindings([(x.name(), lo + i as f64 * step)]);
            expr.evaluate_and_differentiate(Some(x), &at)
        })
        .collect()
}

fn report(name: &str, expr: &Expr, points: &[Dual], start: Instant) {
    let max_slope = points
        .iter()
        .map(|d| d.partial().abs())
        .fold(0.0_f64, f64::max);
    println!(
        "`{}` {} : {} points, max |f'| = {:.6}, {:.3} ms",
        name,
        expr,
        points.len(),
        max_slope,
        start.elapsed().as_secs_f64() * 1e3
    );
    println!("{}", "=".repeat(30));
}

/// `x <- x - alpha * f(x) / f'(x)` until `|f(x)| <= THRESHOLD`
fn newton(f: &Expr, x: &Variable, x0: f64) -> Result<Option<f64>, DiffError> {
    let mut xn = x0;
    for step in 0..MAX_STEPS {
        let d = f.evaluate_and_differentiate(Some(x), &bindings([(x.name(), xn)]))?;
        println!(
            "{:>4}. f({:20.15}) = {:20.15} | df = {:20.15}",
            step,
            xn,
            d.value(),
            d.partial()
        );
        if d.value().abs() <= THRESHOLD {
            return Ok(Some(xn));
        }
        if d.partial() == 0.0 {
            return Ok(None);
        }
        xn -= ALPHA * d.value() / d.partial();
    }
    Ok(None)
}
