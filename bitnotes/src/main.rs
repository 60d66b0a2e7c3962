//! BitNotes - a minimal text editor that autosaves to your Desktop
//!
//! Every edit rewrites `~/Desktop/<name><extension>`.

mod app;

use app::BitNotesApp;
use bitcore::{BitTheme, Config};
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::load();
    log::info!("autosaving under {}", bitcore::storage::desktop_dir(&config.home).display());

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("BitNotes"),
        ..Default::default()
    };

    eframe::run_native(
        "BitNotes",
        options,
        Box::new(move |cc| {
            BitTheme::default().apply(&cc.egui_ctx);
            Box::new(BitNotesApp::new(cc, config))
        }),
    )
}
