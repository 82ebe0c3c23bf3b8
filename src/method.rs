// src/method.rs

use serde::{Deserialize, Serialize};

/// Metode pencarian akar yang didukung oleh visualisasi.
///
/// Geometri langkah tiap metode berbeda, jadi setiap metode punya satu cabang
/// sendiri di `traces::generate_method_traces` dan `info_panel::describe_step`.
/// Menambah metode baru berarti menambah satu varian di sini plus satu cabang
/// di masing-masing `match`, tanpa menyentuh cabang yang sudah ada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodVariant {
    Bisection,
    FalsePosition,
    FixedPoint,
    NewtonRaphson,
    Secant,
}

impl MethodVariant {
    pub const ALL: [MethodVariant; 5] = [
        MethodVariant::Bisection,
        MethodVariant::FalsePosition,
        MethodVariant::FixedPoint,
        MethodVariant::NewtonRaphson,
        MethodVariant::Secant,
    ];

    /// Nama metode untuk judul dan label UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            MethodVariant::Bisection => "Biseksi",
            MethodVariant::FalsePosition => "Posisi Palsu (Regula Falsi)",
            MethodVariant::FixedPoint => "Titik Tetap",
            MethodVariant::NewtonRaphson => "Newton-Raphson",
            MethodVariant::Secant => "Secant",
        }
    }

    /// Metode yang bekerja dengan dua titik `a`/`b` pada record iterasinya.
    pub fn uses_interval(&self) -> bool {
        matches!(
            self,
            MethodVariant::Bisection | MethodVariant::FalsePosition | MethodVariant::Secant
        )
    }
}
