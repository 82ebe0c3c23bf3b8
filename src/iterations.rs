// src/iterations.rs

use serde::{Deserialize, Serialize};

use crate::eval::{EvalError, FunctionEvaluator};

/// Hasil numerik satu langkah iterasi dari solver eksternal.
///
/// `iteration` dihitung mulai dari 1; engine sendiri mengalamatkan record
/// lewat posisi (0-based) di dalam [`IterationSequence`]. Field opsional hanya
/// terisi untuk metode yang memakainya; field yang hilang menurunkan kualitas
/// overlay langkah itu saja, bukan error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration: u32,
    pub xr: f64,
    #[serde(rename = "f(xr)")]
    pub f_xr: f64,
    /// Error relatif dalam persen, >= 0.
    pub error: f64,

    // Biseksi / posisi palsu / secant
    #[serde(default)]
    pub a: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,

    // Newton-Raphson
    #[serde(default)]
    pub f_prime_x: Option<f64>,
    #[serde(default)]
    pub tangent_b: Option<f64>,
    #[serde(default)]
    pub x_next: Option<f64>,

    // Titik tetap
    #[serde(default)]
    pub x_prev: Option<f64>,
    #[serde(default)]
    pub g_x_prev: Option<f64>,

    // Secant
    #[serde(default)]
    pub m_secant: Option<f64>,
    #[serde(default)]
    pub b_secant: Option<f64>,
}

/// Data bantu satu langkah, hasil perhitungan solver yang tidak dimuat di
/// [`IterationRecord`]. Disimpan supaya generator trace tidak perlu
/// mengevaluasi ulang fungsi.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepAux {
    #[serde(default)]
    pub fa: Option<f64>,
    #[serde(default)]
    pub fb: Option<f64>,
    #[serde(default)]
    pub tangent_m: Option<f64>,
    #[serde(default)]
    pub tangent_b: Option<f64>,
    #[serde(default)]
    pub m_secant: Option<f64>,
    #[serde(default)]
    pub b_secant: Option<f64>,
}

/// Pasangan record + data bantu untuk satu langkah.
///
/// Record dan data bantu di-zip sekali saat load supaya keduanya tidak bisa
/// bergeser posisi satu sama lain setelahnya.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterationStep {
    pub record: IterationRecord,
    pub aux: Option<StepAux>,
}

/// Urutan langkah iterasi, immutable setelah dibuat.
#[derive(Debug, Clone, Default)]
pub struct IterationSequence {
    steps: Vec<IterationStep>,
}

impl IterationSequence {
    /// Zip record dengan data bantu berdasarkan posisi. Data bantu boleh lebih
    /// pendek; entri yang kurang di belakang dianggap `None`, entri berlebih
    /// dibuang. Tidak pernah ada pergeseran posisi.
    pub fn from_parts(records: Vec<IterationRecord>, mut aux: Vec<Option<StepAux>>) -> Self {
        aux.resize(records.len(), None);
        let steps = records
            .into_iter()
            .zip(aux)
            .map(|(record, aux)| IterationStep { record, aux })
            .collect();
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&IterationStep> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IterationStep> {
        self.steps.iter()
    }
}

/// Titik-titik sampel kurva untuk digambar di permukaan plot.
///
/// `g_values`/`g_func_str` hanya terisi untuk metode titik tetap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotDataset {
    #[serde(default)]
    pub x_range: Vec<f64>,
    #[serde(default)]
    pub y_values: Vec<f64>,
    pub func_str: String,
    #[serde(default)]
    pub g_values: Option<Vec<f64>>,
    #[serde(default)]
    pub g_func_str: Option<String>,
    #[serde(default)]
    pub root: Option<f64>,
}

impl PlotDataset {
    /// Batas x kurva yang tergambar. Dipakai untuk merentangkan garis tangen
    /// dan secant selebar plot. Fallback ke [-10, 10] kalau belum ada sampel.
    pub fn x_bounds(&self) -> (f64, f64) {
        if self.x_range.is_empty() {
            return (-10.0, 10.0);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in &self.x_range {
            min = min.min(x);
            max = max.max(x);
        }
        (min, max)
    }

    /// Isi `x_range`/`y_values` (dan `g_values` kalau ada `g_func_str`) dengan
    /// sampel merata pada `[x_min, x_max]`, mengevaluasi lewat `evaluator`.
    pub fn sample_curves(
        &mut self,
        x_min: f64,
        x_max: f64,
        samples: usize,
        evaluator: &dyn FunctionEvaluator,
    ) -> Result<(), EvalError> {
        let xs = linspace(x_min, x_max, samples);

        let mut ys = Vec::with_capacity(xs.len());
        for &x in &xs {
            ys.push(evaluator.eval(&self.func_str, x)?);
        }

        if let Some(g_str) = self.g_func_str.clone() {
            let mut gs = Vec::with_capacity(xs.len());
            for &x in &xs {
                gs.push(evaluator.eval(&g_str, x)?);
            }
            self.g_values = Some(gs);
        }

        self.x_range = xs;
        self.y_values = ys;
        Ok(())
    }
}

fn linspace(x_min: f64, x_max: f64, samples: usize) -> Vec<f64> {
    if samples < 2 {
        return vec![x_min];
    }
    let step = (x_max - x_min) / (samples - 1) as f64;
    (0..samples).map(|i| x_min + step * i as f64).collect()
}
