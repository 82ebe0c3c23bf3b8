// src/plot_surface.rs

use egui::Color32;
use egui_plot::{Line, PlotPoints, PlotUi, Points};

use crate::iterations::PlotDataset;
use crate::method::MethodVariant;
use crate::traces::{PlotTrace, TraceStyle};

/// Pembungkus permukaan plot.
///
/// Menyimpan daftar trace yang akan digambar ke `egui_plot` dan mencatat
/// berapa trace dasar yang harus bertahan di semua langkah. Overlay langkah
/// diganti dengan kontrak potong-lalu-tambah: daftar dipotong kembali ke
/// jumlah trace dasar, baru overlay langkah sekarang ditambahkan. Itu yang
/// mencegah overlay menumpuk antar langkah.
pub struct PlotSurfaceAdapter {
    traces: Vec<PlotTrace>,
    base_trace_count: usize,
}

impl PlotSurfaceAdapter {
    pub fn new() -> Self {
        Self {
            traces: Vec::new(),
            base_trace_count: 0,
        }
    }

    /// Bidang koordinat kosong, tanpa trace sama sekali.
    pub fn init_empty(&mut self) {
        self.traces.clear();
        self.base_trace_count = 0;
    }

    /// Gambar trace dasar yang bertahan di semua langkah: kurva f(x), garis
    /// sumbu x, untuk titik tetap juga kurva g(x) dan garis y = x, plus marker
    /// akar kalau solver menyertakannya. Jumlahnya dicatat sebagai batas
    /// potong untuk [`apply_overlays`](Self::apply_overlays).
    pub fn draw_base(&mut self, plot: &PlotDataset, variant: MethodVariant) {
        self.traces.clear();

        let curve: Vec<[f64; 2]> = plot
            .x_range
            .iter()
            .zip(&plot.y_values)
            .map(|(&x, &y)| [x, y])
            .collect();
        self.traces.push(PlotTrace::line(
            &format!("f(x) = {}", plot.func_str),
            curve,
            Color32::from_rgb(100, 150, 255),
            2.0,
        ));

        if variant == MethodVariant::FixedPoint {
            if let Some(g_values) = &plot.g_values {
                let g_curve: Vec<[f64; 2]> = plot
                    .x_range
                    .iter()
                    .zip(g_values)
                    .map(|(&x, &y)| [x, y])
                    .collect();
                let g_name = match &plot.g_func_str {
                    Some(g_str) => format!("g(x) = {}", g_str),
                    None => "g(x)".to_string(),
                };
                self.traces
                    .push(PlotTrace::line(&g_name, g_curve, Color32::GREEN, 2.0));

                let identity: Vec<[f64; 2]> = plot.x_range.iter().map(|&x| [x, x]).collect();
                self.traces.push(PlotTrace::dashed(
                    "y = x",
                    identity,
                    Color32::LIGHT_GRAY,
                    1.0,
                ));
            }
        }

        let axis: Vec<[f64; 2]> = plot.x_range.iter().map(|&x| [x, 0.0]).collect();
        self.traces
            .push(PlotTrace::line("y = 0", axis, Color32::GRAY, 1.0).without_legend());

        if let Some(root) = plot.root {
            self.traces.push(PlotTrace::markers(
                "Akar",
                vec![[root, 0.0]],
                Color32::RED,
                6.0,
            ));
        }

        self.base_trace_count = self.traces.len();
    }

    /// Ganti overlay langkah sebelumnya dengan overlay langkah sekarang.
    /// Trace dasar tidak pernah ikut terpotong.
    pub fn apply_overlays(&mut self, overlays: Vec<PlotTrace>) {
        self.traces.truncate(self.base_trace_count);
        self.traces.extend(overlays);
    }

    pub fn traces(&self) -> &[PlotTrace] {
        &self.traces
    }

    /// Trace di atas jumlah dasar, yaitu overlay langkah yang sedang tampil.
    pub fn overlay_traces(&self) -> &[PlotTrace] {
        &self.traces[self.base_trace_count.min(self.traces.len())..]
    }

    pub fn base_trace_count(&self) -> usize {
        self.base_trace_count
    }

    /// Render seluruh daftar trace ke plot egui. Trace dengan
    /// `show_legend = false` diberi nama kosong supaya tidak masuk legend.
    pub fn show(&self, plot_ui: &mut PlotUi) {
        for trace in &self.traces {
            let name = if trace.show_legend {
                trace.name.as_str()
            } else {
                ""
            };
            let points = PlotPoints::from(trace.points.clone());
            match trace.style {
                TraceStyle::Line { width } => {
                    plot_ui.line(Line::new(name, points).color(trace.color).width(width));
                }
                TraceStyle::DashedLine { width } => {
                    plot_ui.line(
                        Line::new(name, points)
                            .color(trace.color)
                            .width(width)
                            .style(egui_plot::LineStyle::dashed_loose()),
                    );
                }
                TraceStyle::Markers { radius, shape } => {
                    plot_ui.points(
                        Points::new(name, points)
                            .color(trace.color)
                            .radius(radius)
                            .shape(shape),
                    );
                }
            }
        }
    }
}

impl Default for PlotSurfaceAdapter {
    fn default() -> Self {
        Self::new()
    }
}
