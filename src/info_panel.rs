// src/info_panel.rs

use crate::iterations::IterationRecord;
use crate::method::MethodVariant;

/// Deskripsi tekstual terstruktur untuk satu langkah animasi.
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// "Iterasi i dari N".
    pub header: String,
    /// Pasangan label/nilai, semua angka diformat 6 desimal.
    pub rows: Vec<(String, String)>,
    /// Penjelasan prosa tentang apa yang dihitung langkah ini.
    pub description: Vec<String>,
}

/// Susun deskripsi langkah ke-`step_index` (0-based) dari `total_steps`.
///
/// Fungsi murni dan idempoten: pemanggilan berulang dengan argumen sama
/// menghasilkan keluaran identik.
pub fn describe_step(
    record: &IterationRecord,
    step_index: usize,
    total_steps: usize,
    variant: MethodVariant,
) -> StepInfo {
    let header = format!("Iterasi {} dari {}", step_index + 1, total_steps);

    let mut rows = vec![("Iterasi".to_string(), record.iteration.to_string())];

    match variant {
        MethodVariant::Bisection | MethodVariant::FalsePosition => {
            if let (Some(a), Some(b)) = (record.a, record.b) {
                rows.push((
                    "Interval [a, b]".to_string(),
                    format!("[{:.6}, {:.6}]", a, b),
                ));
            }
        }
        MethodVariant::Secant => {
            if let (Some(a), Some(b)) = (record.a, record.b) {
                rows.push((
                    "Titik [x₀, x₁]".to_string(),
                    format!("[{:.6}, {:.6}]", a, b),
                ));
            }
        }
        MethodVariant::NewtonRaphson => {
            if let Some(fp) = record.f_prime_x {
                rows.push(("f'(x)".to_string(), format!("{:.6}", fp)));
            }
        }
        MethodVariant::FixedPoint => {}
    }

    rows.push(("x".to_string(), format!("{:.6}", record.xr)));
    rows.push(("f(x)".to_string(), format!("{:.6}", record.f_xr)));
    rows.push((
        "Error relatif (%)".to_string(),
        format!("{:.6}", record.error),
    ));

    let description = describe_variant_step(record, variant);

    StepInfo {
        header,
        rows,
        description,
    }
}

fn describe_variant_step(record: &IterationRecord, variant: MethodVariant) -> Vec<String> {
    match variant {
        MethodVariant::Bisection => {
            let mut lines = Vec::new();
            if let (Some(a), Some(b)) = (record.a, record.b) {
                lines.push(format!(
                    "Fungsi dievaluasi di titik tengah antara a = {:.4} dan b = {:.4}.",
                    a, b
                ));
            }
            lines.push(format!(
                "Titik baru xr = {:.6} memberikan f(xr) = {:.6}.",
                record.xr, record.f_xr
            ));
            lines.push(
                "Untuk iterasi berikutnya dipilih subinterval tempat fungsi berubah tanda."
                    .to_string(),
            );
            lines
        }
        MethodVariant::FalsePosition => vec![
            "Titik potong garis penghubung kedua ujung interval dengan sumbu x dihitung."
                .to_string(),
            format!(
                "Titik baru xr = {:.6} memberikan f(xr) = {:.6}.",
                record.xr, record.f_xr
            ),
            "Untuk iterasi berikutnya dipilih subinterval tempat fungsi berubah tanda.".to_string(),
        ],
        MethodVariant::FixedPoint => vec![
            "g(x) dihitung untuk nilai x sekarang.".to_string(),
            format!(
                "Nilai x baru adalah {:.6} dengan f(x) = {:.6}.",
                record.xr, record.f_xr
            ),
            format!("Error relatifnya {:.6}%.", record.error),
        ],
        MethodVariant::NewtonRaphson => {
            let mut lines = vec![format!(
                "Garis tangen fungsi ditarik di titik x = {:.6}.",
                record.xr
            )];
            if let Some(fp) = record.f_prime_x {
                lines.push(format!("Kemiringan tangennya f'(x) = {:.6}.", fp));
            }
            if let Some(x_next) = record.x_next {
                lines.push(format!("Nilai x berikutnya adalah {:.6}.", x_next));
            }
            lines
        }
        MethodVariant::Secant => {
            let mut lines = Vec::new();
            if let (Some(a), Some(b)) = (record.a, record.b) {
                lines.push(format!(
                    "Garis ditarik antara titik ({:.4}, f({:.4})) dan ({:.4}, f({:.4})).",
                    a, a, b, b
                ));
            }
            lines.push(format!(
                "Perpotongan garis itu dengan sumbu x memberi titik baru xr = {:.6}.",
                record.xr
            ));
            lines.push(format!("Error relatifnya {:.6}%.", record.error));
            lines
        }
    }
}
