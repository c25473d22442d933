// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use bracket_board::config::consts::{WINDOW_H, WINDOW_W};
use bracket_board::gui;
use eframe::egui::ViewportBuilder;

fn main() {
    bracket_board::log::init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
