// src/eval.rs

use thiserror::Error;

/// Kegagalan evaluasi fungsi pada satu titik.
///
/// Error ini tidak pernah naik sampai ke host: generator trace menangkapnya,
/// mencatat lewat `eprintln!`, lalu melanjutkan dengan overlay parsial.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("fungsi '{expr}' tidak dikenal oleh evaluator")]
    UnknownFunction { expr: String },

    #[error("hasil evaluasi tidak finite: f({x}) = {fx}")]
    NonFiniteValue { x: f64, fx: f64 },
}

/// Kolaborator eksternal: evaluator fungsi `func_str`/`g_func_str` pada satu x.
///
/// Hanya dipakai sebagai fallback ketika data bantu (`StepAux`) tidak memuat
/// nilai yang dibutuhkan generator trace. Parsing ekspresi bukan urusan crate
/// ini; implementasi bebas memakai parser apa pun, atau tabel lookup seperti
/// [`KnownFunctions`].
pub trait FunctionEvaluator {
    fn eval(&self, expr: &str, x: f64) -> Result<f64, EvalError>;
}

impl<F> FunctionEvaluator for F
where
    F: Fn(&str, f64) -> Result<f64, EvalError>,
{
    fn eval(&self, expr: &str, x: f64) -> Result<f64, EvalError> {
        self(expr, x)
    }
}

/// Evaluator berbasis tabel: memetakan string fungsi yang sudah dikenal ke
/// closure Rust. Cukup untuk dataset demo yang dibundel; string yang tidak
/// terdaftar menghasilkan [`EvalError::UnknownFunction`].
pub struct KnownFunctions {
    entries: Vec<(String, Box<dyn Fn(f64) -> f64>)>,
}

impl KnownFunctions {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn register<F>(mut self, expr: &str, f: F) -> Self
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.entries.push((expr.to_string(), Box::new(f)));
        self
    }
}

impl Default for KnownFunctions {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionEvaluator for KnownFunctions {
    fn eval(&self, expr: &str, x: f64) -> Result<f64, EvalError> {
        let f = self
            .entries
            .iter()
            .find(|(known, _)| known == expr)
            .map(|(_, f)| f)
            .ok_or_else(|| EvalError::UnknownFunction {
                expr: expr.to_string(),
            })?;

        let fx = f(x);
        if !fx.is_finite() {
            return Err(EvalError::NonFiniteValue { x, fx });
        }
        Ok(fx)
    }
}
