#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use line_sketch::panels::STATUS_BAR_HEIGHT;
    use line_sketch::{EditorConfig, SketchApp};

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match std::env::args().nth(1) {
        Some(path) => EditorConfig::load(&path).unwrap_or_else(|err| {
            log::error!("{err}, using default config");
            EditorConfig::default()
        }),
        None => EditorConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Line Sketch")
            .with_inner_size([config.width as f32, config.height as f32 + STATUS_BAR_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "line_sketch",
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchApp::new(cc, config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
