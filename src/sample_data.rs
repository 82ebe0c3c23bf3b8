// src/sample_data.rs

use thiserror::Error;

use crate::eval::{EvalError, KnownFunctions};
use crate::method::MethodVariant;
use crate::solver_output::SolverOutput;

/// Dataset demo: keluaran solver yang sudah direkam, satu berkas JSON per
/// metode. Semuanya mencari akar f(x) = x^2 - 2 supaya hasil antar metode
/// gampang dibandingkan.
#[derive(Debug, Error)]
pub enum SampleDataError {
    #[error("gagal membaca JSON keluaran solver: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("gagal menyampel kurva: {0}")]
    Eval(#[from] EvalError),
}

/// Evaluator untuk fungsi-fungsi yang dipakai dataset demo.
pub fn demo_evaluator() -> KnownFunctions {
    KnownFunctions::new()
        .register("x^2 - 2", |x| x * x - 2.0)
        .register("(x + 2/x)/2", |x| (x + 2.0 / x) * 0.5)
}

/// Muat keluaran solver yang dibundel untuk satu metode, termasuk menyampel
/// kurva plotnya. Rentang x mengikuti aturan solver: metode berkurung memakai
/// `[min(a,b) - 1, max(a,b) + 1]` dari record pertama, metode terbuka memakai
/// `x0 ± 5`.
pub fn load_sample(variant: MethodVariant) -> Result<SolverOutput, SampleDataError> {
    let raw = match variant {
        MethodVariant::Bisection => include_str!("../assets/bisection.json"),
        MethodVariant::FalsePosition => include_str!("../assets/false_position.json"),
        MethodVariant::FixedPoint => include_str!("../assets/fixed_point.json"),
        MethodVariant::NewtonRaphson => include_str!("../assets/newton_raphson.json"),
        MethodVariant::Secant => include_str!("../assets/secant.json"),
    };

    let mut output = SolverOutput::from_json(raw)?;
    let (x_min, x_max) = sample_range(variant, &output);
    let evaluator = demo_evaluator();
    output
        .plot_data
        .sample_curves(x_min, x_max, 200, &evaluator)?;
    Ok(output)
}

fn sample_range(variant: MethodVariant, output: &SolverOutput) -> (f64, f64) {
    let first = output.results.first();
    match variant {
        MethodVariant::Bisection | MethodVariant::FalsePosition | MethodVariant::Secant => {
            match first.and_then(|r| r.a.zip(r.b)) {
                Some((a, b)) => (a.min(b) - 1.0, a.max(b) + 1.0),
                None => (-10.0, 10.0),
            }
        }
        MethodVariant::FixedPoint => {
            let x0 = first.and_then(|r| r.x_prev).unwrap_or(0.0);
            (x0 - 5.0, x0 + 5.0)
        }
        MethodVariant::NewtonRaphson => {
            let x0 = first.map(|r| r.xr).unwrap_or(0.0);
            (x0 - 5.0, x0 + 5.0)
        }
    }
}
