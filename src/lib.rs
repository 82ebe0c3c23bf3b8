// src/lib.rs

pub mod animation;
pub mod eval;
pub mod info_panel;
pub mod iterations;
pub mod method;
pub mod plot_surface;
pub mod sample_data;
pub mod screens;
pub mod solver_output;
pub mod traces;
