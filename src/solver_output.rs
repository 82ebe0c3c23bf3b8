// src/solver_output.rs

use serde::Deserialize;

use crate::iterations::{IterationRecord, PlotDataset, StepAux};
use crate::method::MethodVariant;

/// Payload hasil solver eksternal, satu perhitungan lengkap.
///
/// Bentuknya mengikuti JSON yang dikeluarkan solver: daftar record iterasi
/// (`results`), data bantu per langkah (`animation_data`, sejajar per posisi,
/// entri boleh null), dataset kurva (`plot_data`), akar akhir, dan ringkasan
/// prosa yang dibuat solver.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverOutput {
    pub method: MethodVariant,
    #[serde(default)]
    pub root: Option<f64>,
    pub results: Vec<IterationRecord>,
    #[serde(default)]
    pub animation_data: Vec<Option<StepAux>>,
    pub plot_data: PlotDataset,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl SolverOutput {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
