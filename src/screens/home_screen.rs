// src/screens/home_screen.rs

use egui::{Color32, RichText, Ui};

use crate::method::MethodVariant;

pub struct HomeScreen {}

impl HomeScreen {
    pub fn new() -> Self {
        Self {}
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                RichText::new("Selamat Datang di Visualisasi Metode Numerik Pencarian Akar")
                    .color(Color32::LIGHT_GREEN)
                    .strong()
                    .size(24.0),
            );

            ui.add_space(30.0);

            ui.group(|ui| {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.heading(
                        RichText::new("Metode yang Didukung")
                            .color(Color32::WHITE)
                            .strong(),
                    );
                    ui.add_space(15.0);

                    for variant in MethodVariant::ALL {
                        let keterangan = match variant {
                            MethodVariant::Bisection => {
                                "membagi dua interval dan mengikuti perubahan tanda"
                            }
                            MethodVariant::FalsePosition => {
                                "interpolasi linear antara kedua ujung interval"
                            }
                            MethodVariant::FixedPoint => {
                                "iterasi x = g(x) sampai mencapai titik tetap"
                            }
                            MethodVariant::NewtonRaphson => {
                                "mengikuti garis tangen memakai turunan fungsi"
                            }
                            MethodVariant::Secant => {
                                "garis melalui dua titik terakhir, tanpa turunan"
                            }
                        };
                        ui.label(
                            RichText::new(format!("• {}: {}", variant.display_name(), keterangan))
                                .color(Color32::WHITE)
                                .size(16.0),
                        );
                        ui.add_space(4.0);
                    }
                });
                ui.add_space(10.0);
            });

            ui.add_space(40.0);

            ui.label(
                RichText::new("Gunakan navigasi di sisi kiri untuk membuka halaman visualisasi.")
                    .color(Color32::WHITE)
                    .size(18.0),
            );

            ui.add_space(40.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("💡 Tips:").strong().color(Color32::YELLOW));
                ui.label(
                    RichText::new("Jalankan animasi langkah demi langkah untuk melihat bagaimana tiap metode mendekati akar.")
                        .color(Color32::WHITE),
                );
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("ℹ️ Info:").strong().color(Color32::WHITE));
                ui.label(
                    RichText::new("Data iterasi dihitung oleh solver eksternal; aplikasi ini hanya memutar ulang jejaknya.")
                        .color(Color32::WHITE),
                );
            });
        });
    }
}
