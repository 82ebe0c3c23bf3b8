// src/screens/iteration_table_screen.rs

use egui::{Color32, Grid, RichText, ScrollArea, Ui};

use crate::animation::AnimationController;

/// Tabel seluruh iterasi dari data yang sedang dimuat, plus ringkasan prosa
/// dari solver. Padanan halaman hasil pada versi webnya.
pub struct IterationTableScreen {}

impl IterationTableScreen {
    pub fn new() -> Self {
        Self {}
    }

    pub fn show(&mut self, ui: &mut Ui, controller: &AnimationController, explanation: Option<&str>) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.heading(RichText::new("Tabel Iterasi").color(Color32::WHITE).strong());
            ui.add_space(5.0);
            if controller.has_data() {
                ui.label(
                    RichText::new(format!("Metode: {}", controller.variant().display_name()))
                        .color(Color32::LIGHT_BLUE)
                        .strong(),
                );
            }
            ui.add_space(15.0);
        });

        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .max_height(ui.available_height() - 20.0)
            .show(ui, |ui| {
                if !controller.has_data() {
                    ui.vertical_centered(|ui_centered| {
                        ui_centered.add_space(20.0);
                        ui_centered.label(
                            RichText::new("Belum ada data iterasi.")
                                .color(Color32::GRAY)
                                .italics(),
                        );
                        ui_centered.label(
                            RichText::new("Muat data lewat halaman Visualisasi terlebih dahulu.")
                                .color(Color32::GRAY)
                                .italics(),
                        );
                    });
                    return;
                }

                let uses_interval = controller.variant().uses_interval();

                ui.add_space(5.0);
                Grid::new("iteration_table_grid")
                    .num_columns(6)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui_grid| {
                        ui_grid.strong(RichText::new("Iterasi").color(Color32::LIGHT_BLUE));
                        ui_grid.strong(RichText::new("a").color(Color32::LIGHT_BLUE));
                        ui_grid.strong(RichText::new("b").color(Color32::LIGHT_BLUE));
                        ui_grid.strong(RichText::new("xr").color(Color32::LIGHT_BLUE));
                        ui_grid.strong(RichText::new("f(xr)").color(Color32::LIGHT_BLUE));
                        ui_grid.strong(RichText::new("Error (%)").color(Color32::LIGHT_BLUE));
                        ui_grid.end_row();

                        for step in controller.sequence().iter() {
                            let record = &step.record;
                            let bound = |v: Option<f64>| match v {
                                Some(v) if uses_interval => format!("{:.6}", v),
                                _ => "-".to_string(),
                            };

                            ui_grid.label(
                                RichText::new(record.iteration.to_string()).color(Color32::WHITE),
                            );
                            ui_grid.label(RichText::new(bound(record.a)).color(Color32::WHITE));
                            ui_grid.label(RichText::new(bound(record.b)).color(Color32::WHITE));
                            ui_grid.label(
                                RichText::new(format!("{:.6}", record.xr))
                                    .color(Color32::YELLOW)
                                    .strong(),
                            );
                            ui_grid.label(
                                RichText::new(format!("{:.6}", record.f_xr)).color(Color32::WHITE),
                            );
                            ui_grid.label(
                                RichText::new(format!("{:.6}", record.error))
                                    .color(Color32::LIGHT_GREEN),
                            );
                            ui_grid.end_row();
                        }
                    });

                if let Some(text) = explanation {
                    ui.add_space(20.0);
                    ui.group(|ui| {
                        ui.add_space(5.0);
                        ui.heading(
                            RichText::new("Penjelasan Hasil")
                                .color(Color32::LIGHT_GREEN)
                                .strong(),
                        );
                        ui.add_space(8.0);
                        ui.label(RichText::new(text).color(Color32::WHITE));
                        ui.add_space(5.0);
                    });
                }
            });
    }
}
