mod app;
mod color;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use app::RustyPenguinApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is loaded exactly once; a failure here aborts startup.
    let dataset = match data::loader::load_embedded() {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            log::error!("Failed to load the packaged dataset: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} penguins", dataset.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Penguin – Palmer Penguins Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyPenguinApp::new(dataset)))),
    )
}
