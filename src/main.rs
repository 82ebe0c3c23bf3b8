// src/main.rs

use eframe::{App, CreationContext, NativeOptions};
use egui::{
    CentralPanel, Color32, Context, Frame, Layout, RichText, SidePanel, Stroke, TopBottomPanel,
    ViewportBuilder,
};

use metnum::animation::AnimationController;
use metnum::sample_data;
use metnum::screens::{
    home_screen::HomeScreen, iteration_table_screen::IterationTableScreen,
    visualizer_screen::VisualizerScreen,
};

#[derive(PartialEq)]
enum AppScreen {
    Home,
    Visualizer,
    IterationTable,
}

struct MyApp {
    current_screen: AppScreen,

    controller: AnimationController,
    /// Ringkasan prosa dari solver untuk data yang sedang dimuat.
    explanation: Option<String>,

    home_screen: HomeScreen,
    visualizer_screen: VisualizerScreen,
    iteration_table_screen: IterationTableScreen,
}

impl MyApp {
    fn new(cc: &CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style
            .text_styles
            .insert(egui::TextStyle::Heading, egui::FontId::proportional(28.0));
        style
            .text_styles
            .insert(egui::TextStyle::Body, egui::FontId::proportional(16.0));
        cc.egui_ctx.set_style(style);

        Self {
            current_screen: AppScreen::Home,
            controller: AnimationController::new(Box::new(sample_data::demo_evaluator())),
            explanation: None,
            home_screen: HomeScreen::new(),
            visualizer_screen: VisualizerScreen::new(),
            iteration_table_screen: IterationTableScreen::new(),
        }
    }
}

impl App for MyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new("Visualisasi Metode Numerik Pencarian Akar")
                        .color(Color32::WHITE)
                        .strong(),
                );
            });
            ui.add_space(10.0);
        });

        SidePanel::left("side_panel")
            .exact_width(180.0)
            .frame(
                Frame::window(&ctx.style())
                    .fill(Color32::from_rgb(200, 180, 255))
                    .stroke(Stroke::new(1.0, Color32::from_rgb(150, 100, 255)))
                    .corner_radius(5.0),
            )
            .show(ctx, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading(
                        RichText::new("Navigasi")
                            .color(Color32::from_rgb(80, 0, 150))
                            .strong(),
                    );
                });
                ui.add_space(20.0);

                ui.vertical(|ui| {
                    if ui
                        .button(RichText::new("🏠 Home").size(18.0).color(Color32::WHITE))
                        .clicked()
                    {
                        self.current_screen = AppScreen::Home;
                    }
                    ui.add_space(10.0);
                    if ui
                        .button(
                            RichText::new("📊 Visualisasi")
                                .size(18.0)
                                .color(Color32::WHITE),
                        )
                        .clicked()
                    {
                        self.current_screen = AppScreen::Visualizer;
                    }
                    ui.add_space(10.0);
                    if ui
                        .button(
                            RichText::new("📋 Tabel Iterasi")
                                .size(18.0)
                                .color(Color32::WHITE),
                        )
                        .clicked()
                    {
                        self.current_screen = AppScreen::IterationTable;
                    }
                });
            });

        CentralPanel::default()
            .frame(
                Frame::window(&ctx.style())
                    .fill(Color32::from_rgb(30, 30, 40))
                    .corner_radius(0.0),
            )
            .show(ctx, |ui| {
                ui.add_space(10.0);
                match self.current_screen {
                    AppScreen::Home => self.home_screen.show(ui),
                    AppScreen::Visualizer => self.visualizer_screen.show(
                        ui,
                        &mut self.controller,
                        &mut self.explanation,
                    ),
                    AppScreen::IterationTable => self.iteration_table_screen.show(
                        ui,
                        &self.controller,
                        self.explanation.as_deref(),
                    ),
                }

                ui.add_space(10.0);
                ui.with_layout(Layout::bottom_up(egui::Align::LEFT), |ui_bottom| {
                    let state = self.controller.state();
                    let status = if self.controller.has_data() {
                        format!(
                            "Metode aktif: {} | Langkah: {}/{} | {}",
                            self.controller.variant().display_name(),
                            state.current_step,
                            state.total_steps,
                            if state.is_playing {
                                "sedang diputar"
                            } else {
                                "berhenti"
                            }
                        )
                    } else {
                        "Belum ada data iterasi yang dimuat.".to_string()
                    };
                    ui_bottom.label(
                        RichText::new(status)
                            .color(if state.is_playing {
                                Color32::LIGHT_GREEN
                            } else {
                                Color32::GRAY
                            })
                            .size(14.0)
                            .italics(),
                    );
                });
            });
    }
}

fn main() -> eframe::Result<()> {
    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Visualisasi Metode Numerik Pencarian Akar"),
        ..NativeOptions::default()
    };

    eframe::run_native(
        "Visualisasi Metode Numerik Pencarian Akar",
        native_options,
        Box::new(|cc| Ok(Box::new(MyApp::new(cc)))),
    )
}
