// Rust Day View Application
// Main entry point

use rust_dayview::models::settings::Settings;
use rust_dayview::services::settings::SettingsService;
use rust_dayview::ui_egui::DayViewApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    log::info!("Starting Rust Day View");

    let settings = load_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 900.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Day View"),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Day View",
        options,
        Box::new(move |cc| Ok(Box::new(DayViewApp::new(cc, settings)))),
    )
}

fn load_settings() -> Settings {
    let Some(service) = SettingsService::from_default_location() else {
        log::warn!("No config directory available; using default settings");
        return Settings::default();
    };

    if let Err(e) = service.ensure_exists() {
        log::warn!("Could not write default config: {:#}", e);
    }

    let settings = service.load_or_default();
    log::info!(
        "Loaded settings from {}: default view {:?}",
        service.path().display(),
        settings.default_view
    );
    settings
}
