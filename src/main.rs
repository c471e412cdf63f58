mod app;
mod input;
mod style;
mod view;

use app::TwinPane;
use eframe::egui;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use twinpane::config::Config;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = Config::create_default() {
        warn!("could not write default config: {e}");
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_title("Twinpane"),
        ..Default::default()
    };

    eframe::run_native(
        "Twinpane",
        options,
        Box::new(|cc| Ok(Box::new(TwinPane::new(cc, config)))),
    )
}
