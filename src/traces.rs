// src/traces.rs

use egui::Color32;
use egui_plot::MarkerShape;

use crate::eval::FunctionEvaluator;
use crate::iterations::{IterationRecord, PlotDataset, StepAux};
use crate::method::MethodVariant;

/// Satu trace di permukaan plot: kurva/garis atau kumpulan marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotTrace {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub style: TraceStyle,
    pub color: Color32,
    /// Trace pembantu (segmen evaluasi, garis bantu) tidak ikut legend.
    pub show_legend: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceStyle {
    Line { width: f32 },
    DashedLine { width: f32 },
    Markers { radius: f32, shape: MarkerShape },
}

impl PlotTrace {
    pub fn line(name: &str, points: Vec<[f64; 2]>, color: Color32, width: f32) -> Self {
        Self {
            name: name.to_string(),
            points,
            style: TraceStyle::Line { width },
            color,
            show_legend: true,
        }
    }

    pub fn dashed(name: &str, points: Vec<[f64; 2]>, color: Color32, width: f32) -> Self {
        Self {
            name: name.to_string(),
            points,
            style: TraceStyle::DashedLine { width },
            color,
            show_legend: true,
        }
    }

    pub fn markers(name: &str, points: Vec<[f64; 2]>, color: Color32, radius: f32) -> Self {
        Self {
            name: name.to_string(),
            points,
            style: TraceStyle::Markers {
                radius,
                shape: MarkerShape::Circle,
            },
            color,
            show_legend: true,
        }
    }

    pub fn shape(mut self, shape: MarkerShape) -> Self {
        if let TraceStyle::Markers { radius, .. } = self.style {
            self.style = TraceStyle::Markers { radius, shape };
        }
        self
    }

    pub fn without_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }

    pub fn is_markers(&self) -> bool {
        matches!(self.style, TraceStyle::Markers { .. })
    }
}

/// Evaluasi fail-soft: kegagalan dicatat lalu dikembalikan sebagai `None`
/// supaya overlay parsial yang sudah terbangun tetap bisa dipakai.
fn try_eval(evaluator: &dyn FunctionEvaluator, expr: &str, x: f64) -> Option<f64> {
    match evaluator.eval(expr, x) {
        Ok(v) => Some(v),
        Err(e) => {
            eprintln!("[traces] evaluasi '{}' pada x = {} gagal: {}", expr, x, e);
            None
        }
    }
}

/// Bangun overlay satu langkah sesuai metode aktif.
///
/// Fungsi murni: tidak menyentuh state apa pun, hasilnya hanya bergantung pada
/// argumen. Urutan trace per metode tetap (marker dulu, baru garis penghubung)
/// supaya konsumen yang mengandalkan posisi stabil antar langkah.
///
/// Field wajib yang hilang untuk metode aktif menghasilkan daftar kosong
/// (degradasi, bukan error); kegagalan evaluator menghasilkan daftar parsial.
pub fn generate_method_traces(
    record: &IterationRecord,
    aux: Option<&StepAux>,
    _step_index: usize,
    variant: MethodVariant,
    plot: &PlotDataset,
    evaluator: &dyn FunctionEvaluator,
) -> Vec<PlotTrace> {
    match variant {
        MethodVariant::Bisection => bracket_traces(record),
        MethodVariant::FalsePosition => {
            let mut traces = bracket_traces(record);

            // Recta secante melalui (a, fa) dan (b, fb). Nilai fa/fb diambil
            // dari data bantu kalau ada, kalau tidak dievaluasi ulang.
            if let (Some(a), Some(b)) = (record.a, record.b) {
                let fa = aux
                    .and_then(|p| p.fa)
                    .or_else(|| try_eval(evaluator, &plot.func_str, a));
                let fb = aux
                    .and_then(|p| p.fb)
                    .or_else(|| try_eval(evaluator, &plot.func_str, b));
                if let (Some(fa), Some(fb)) = (fa, fb) {
                    traces.push(PlotTrace::line(
                        "Garis secant",
                        vec![[a, fa], [b, fb]],
                        Color32::PURPLE,
                        2.0,
                    ));
                }
            }
            traces
        }
        MethodVariant::FixedPoint => fixed_point_traces(record, plot, evaluator),
        MethodVariant::NewtonRaphson => newton_traces(record, aux, plot),
        MethodVariant::Secant => secant_traces(record, aux, plot, evaluator),
    }
}

/// Overlay dasar metode berkurung: marker interval, marker titik potong, dan
/// segmen evaluasi vertikal. Dipakai biseksi dan posisi palsu.
fn bracket_traces(record: &IterationRecord) -> Vec<PlotTrace> {
    let mut traces = Vec::new();

    if let (Some(a), Some(b)) = (record.a, record.b) {
        traces.push(PlotTrace::markers(
            "Interval",
            vec![[a, 0.0], [b, 0.0]],
            Color32::ORANGE,
            5.0,
        ));
    }

    traces.push(
        PlotTrace::markers(
            "Titik potong",
            vec![[record.xr, record.f_xr]],
            Color32::RED,
            6.0,
        )
        .shape(MarkerShape::Asterisk),
    );

    traces.push(
        PlotTrace::dashed(
            "Evaluasi",
            vec![[record.xr, 0.0], [record.xr, record.f_xr]],
            Color32::RED,
            1.0,
        )
        .without_legend(),
    );

    traces
}

/// Tangga titik tetap: marker (x_prev, g(x_prev)), langkah horizontal ke
/// x = xr, lalu langkah vertikal turun/naik ke f(xr).
fn fixed_point_traces(
    record: &IterationRecord,
    plot: &PlotDataset,
    evaluator: &dyn FunctionEvaluator,
) -> Vec<PlotTrace> {
    let Some(x_prev) = record.x_prev else {
        return Vec::new();
    };

    let g_x_prev = match record.g_x_prev {
        Some(v) => v,
        None => {
            let Some(g_str) = plot.g_func_str.as_deref() else {
                return Vec::new();
            };
            match try_eval(evaluator, g_str, x_prev) {
                Some(v) => v,
                None => return Vec::new(),
            }
        }
    };

    vec![
        PlotTrace::markers("g(x)", vec![[x_prev, g_x_prev]], Color32::GREEN, 5.0),
        PlotTrace::dashed(
            "Langkah horizontal",
            vec![[x_prev, g_x_prev], [record.xr, g_x_prev]],
            Color32::ORANGE,
            2.0,
        )
        .without_legend(),
        PlotTrace::dashed(
            "Langkah vertikal",
            vec![[record.xr, g_x_prev], [record.xr, record.f_xr]],
            Color32::PURPLE,
            2.0,
        )
        .without_legend(),
    ]
}

/// Garis tangen Newton-Raphson direntangkan selebar kurva, plus marker titik
/// sekarang, marker titik berikutnya (kalau ada), dan segmen evaluasi.
fn newton_traces(
    record: &IterationRecord,
    aux: Option<&StepAux>,
    plot: &PlotDataset,
) -> Vec<PlotTrace> {
    let Some(m) = record.f_prime_x else {
        return Vec::new();
    };

    let intercept = record
        .tangent_b
        .or_else(|| aux.and_then(|p| p.tangent_b))
        .unwrap_or(record.f_xr - m * record.xr);

    let (x_min, x_max) = plot.x_bounds();

    let mut traces = vec![PlotTrace::markers(
        "Titik sekarang",
        vec![[record.xr, record.f_xr]],
        Color32::RED,
        5.0,
    )];

    if let Some(x_next) = record.x_next {
        traces.push(
            PlotTrace::markers("Titik berikutnya", vec![[x_next, 0.0]], Color32::GREEN, 5.0)
                .shape(MarkerShape::Diamond),
        );
    }

    traces.push(PlotTrace::line(
        "Tangen",
        vec![[x_min, m * x_min + intercept], [x_max, m * x_max + intercept]],
        Color32::RED,
        2.0,
    ));

    traces.push(
        PlotTrace::dashed(
            "Evaluasi",
            vec![[record.xr, 0.0], [record.xr, record.f_xr]],
            Color32::GRAY,
            1.0,
        )
        .without_legend(),
    );

    traces
}

/// Garis secant selebar kurva, marker kedua titik sebelumnya, dan marker
/// perpotongan dengan sumbu x.
fn secant_traces(
    record: &IterationRecord,
    aux: Option<&StepAux>,
    plot: &PlotDataset,
    evaluator: &dyn FunctionEvaluator,
) -> Vec<PlotTrace> {
    // Kemiringan dan intersep: dari record, dari data bantu, atau dihitung
    // ulang lewat evaluator. Tanpa ketiganya langkah ini tidak bisa digambar.
    let params = record
        .m_secant
        .zip(record.b_secant)
        .or_else(|| aux.and_then(|p| p.m_secant.zip(p.b_secant)))
        .or_else(|| recompute_secant_params(record, plot, evaluator));
    let Some((m, intercept)) = params else {
        return Vec::new();
    };

    let mut traces = Vec::new();

    if let (Some(a), Some(b)) = (record.a, record.b) {
        let fa = try_eval(evaluator, &plot.func_str, a);
        let fb = try_eval(evaluator, &plot.func_str, b);
        if let (Some(fa), Some(fb)) = (fa, fb) {
            traces.push(PlotTrace::markers(
                "Titik sebelumnya",
                vec![[a, fa], [b, fb]],
                Color32::ORANGE,
                5.0,
            ));
        }
    }

    traces.push(
        PlotTrace::markers("Titik baru", vec![[record.xr, 0.0]], Color32::RED, 6.0)
            .shape(MarkerShape::Asterisk),
    );

    let (x_min, x_max) = plot.x_bounds();
    traces.push(PlotTrace::line(
        "Garis secant",
        vec![[x_min, m * x_min + intercept], [x_max, m * x_max + intercept]],
        Color32::PURPLE,
        2.0,
    ));

    traces
}

fn recompute_secant_params(
    record: &IterationRecord,
    plot: &PlotDataset,
    evaluator: &dyn FunctionEvaluator,
) -> Option<(f64, f64)> {
    let (a, b) = record.a.zip(record.b)?;
    if a == b {
        return None;
    }
    let fa = try_eval(evaluator, &plot.func_str, a)?;
    let fb = try_eval(evaluator, &plot.func_str, b)?;
    let m = (fb - fa) / (b - a);
    Some((m, fb - m * b))
}
