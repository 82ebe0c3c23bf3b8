// src/screens/visualizer_screen.rs

use std::time::Instant;

use egui::{Color32, Grid, RichText, ScrollArea, Slider, Ui};
use egui_plot::{Legend, Plot};

use crate::animation::AnimationController;
use crate::method::MethodVariant;
use crate::sample_data;

/// Halaman utama: plot dengan animasi langkah, kontrol playback, dan panel
/// info iterasi. Controller dimiliki aplikasi; halaman ini hanya mendorongnya.
pub struct VisualizerScreen {
    pub selected_variant: MethodVariant,
    status_message: String,
}

impl VisualizerScreen {
    pub fn new() -> Self {
        Self {
            selected_variant: MethodVariant::Bisection,
            status_message: "Belum ada data. Pilih metode lalu tekan 'Muat Data'.".to_string(),
        }
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        controller: &mut AnimationController,
        explanation: &mut Option<String>,
    ) {
        // Jalankan tick yang sudah jatuh tempo dan jadwalkan repaint untuk
        // tick berikutnya selama animasi berjalan.
        if let Some(remaining) = controller.poll(Instant::now()) {
            ui.ctx().request_repaint_after(remaining);
        }

        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(5.0);
                ui.heading(
                    RichText::new("Visualisasi Langkah Iterasi")
                        .color(Color32::WHITE)
                        .strong(),
                );
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Metode:").color(Color32::WHITE));
                    egui::ComboBox::from_id_salt("method_selector")
                        .selected_text(self.selected_variant.display_name())
                        .show_ui(ui, |ui| {
                            for variant in MethodVariant::ALL {
                                ui.selectable_value(
                                    &mut self.selected_variant,
                                    variant,
                                    variant.display_name(),
                                );
                            }
                        });

                    if ui
                        .button(RichText::new("📥 Muat Data").color(Color32::WHITE))
                        .clicked()
                    {
                        self.load_selected(controller, explanation);
                    }
                });
                ui.add_space(10.0);

                ui.group(|ui| {
                    Plot::new("visualizer_plot")
                        .width(ui.available_width())
                        .height(360.0)
                        .legend(Legend::default())
                        .show_background(true)
                        .show(ui, |plot_ui| {
                            controller.surface().show(plot_ui);
                        });
                });
                ui.add_space(10.0);

                self.playback_controls(ui, controller);
                ui.add_space(10.0);

                self.info_panel(ui, controller);

                ui.add_space(10.0);
                ui.label(
                    RichText::new(&self.status_message)
                        .color(Color32::GRAY)
                        .italics()
                        .size(14.0),
                );
            });
    }

    fn load_selected(
        &mut self,
        controller: &mut AnimationController,
        explanation: &mut Option<String>,
    ) {
        match sample_data::load_sample(self.selected_variant) {
            Ok(output) => {
                self.status_message = format!(
                    "Data {} dimuat: {} iterasi, f(x) = {}.",
                    output.method.display_name(),
                    output.results.len(),
                    output.plot_data.func_str,
                );
                *explanation = output.explanation;
                controller.load_data(
                    output.plot_data,
                    output.results,
                    output.animation_data,
                    output.method,
                );
            }
            Err(e) => {
                self.status_message = format!("Gagal memuat data: {}", e);
                eprintln!("[visualizer] {}", self.status_message);
            }
        }
    }

    fn playback_controls(&mut self, ui: &mut Ui, controller: &mut AnimationController) {
        let state = controller.state();

        ui.horizontal(|ui| {
            if ui.button(RichText::new("⏮ Ulang").size(16.0)).clicked() {
                controller.reset();
            }
            if ui.button(RichText::new("◀ Mundur").size(16.0)).clicked() {
                controller.step_backward();
            }

            let play_label = if state.is_playing {
                "⏸ Jeda"
            } else {
                "▶ Putar"
            };
            if ui.button(RichText::new(play_label).size(16.0)).clicked() {
                controller.play();
            }

            if ui.button(RichText::new("Maju ▶").size(16.0)).clicked() {
                controller.step_forward();
            }

            ui.add_space(20.0);
            ui.label(RichText::new("Kecepatan:").color(Color32::WHITE));
            let mut speed_ms = state.speed_ms;
            ui.add(Slider::new(&mut speed_ms, 100..=3000).suffix(" ms"));
            if speed_ms != state.speed_ms {
                controller.set_speed(speed_ms);
            }

            ui.add_space(20.0);
            ui.label(
                RichText::new(format!("Langkah {}/{}", state.current_step, state.total_steps))
                    .color(Color32::LIGHT_BLUE)
                    .strong(),
            );
        });
    }

    fn info_panel(&self, ui: &mut Ui, controller: &AnimationController) {
        ui.group(|ui| {
            ui.add_space(5.0);
            match controller.current_info() {
                Some(info) => {
                    ui.heading(RichText::new(&info.header).color(Color32::LIGHT_BLUE).strong());
                    ui.add_space(8.0);

                    Grid::new("iteration_info_grid")
                        .num_columns(2)
                        .spacing([40.0, 6.0])
                        .striped(true)
                        .show(ui, |ui_grid| {
                            for (label, value) in &info.rows {
                                ui_grid.strong(RichText::new(label).color(Color32::WHITE));
                                ui_grid.label(RichText::new(value).color(Color32::YELLOW));
                                ui_grid.end_row();
                            }
                        });

                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Deskripsi langkah:")
                            .color(Color32::WHITE)
                            .strong(),
                    );
                    for line in &info.description {
                        ui.label(RichText::new(line).color(Color32::LIGHT_GRAY));
                    }
                }
                None => {
                    ui.label(
                        RichText::new("Tekan Putar untuk memulai animasi langkah demi langkah.")
                            .color(Color32::GRAY)
                            .italics(),
                    );
                }
            }
            ui.add_space(5.0);
        });
    }
}
