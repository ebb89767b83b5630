// main.rs - eframe entry point

use eframe::egui;
use log::info;

mod ui;

use ui::LifeApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("starting Game of Life");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}
