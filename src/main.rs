#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use maskpaint::app::App;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(eframe::egui::vec2(1200.0, 800.0))
            .with_title("maskpaint"),
        ..Default::default()
    };

    eframe::run_native("maskpaint", options, Box::new(|_cc| Ok(Box::new(App::new()))))
}
