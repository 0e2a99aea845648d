mod app;
mod app_dir;
mod canvas;
mod input;
mod preferences;
mod screenshot;
mod ui;

use eframe::egui;
use tracing::info;

use app::FractalVisApp;
use preferences::AppPreferences;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Fractal Visualiser");

    let prefs = AppPreferences::load();

    let options = eframe::NativeOptions {
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_title("Fractal Visualiser")
            .with_inner_size([prefs.window_width, prefs.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "FractalVisualiser",
        options,
        Box::new(move |cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            Ok(Box::new(FractalVisApp::new(cc, prefs)?))
        }),
    )
}
