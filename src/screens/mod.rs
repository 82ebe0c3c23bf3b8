// src/screens/mod.rs

pub mod home_screen;
pub mod iteration_table_screen;
pub mod visualizer_screen;
