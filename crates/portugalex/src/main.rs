//! PortugalEx: Travel-Rule compliant withdrawal demo

use eframe::egui;

mod app;
mod home;
mod ui;
mod withdrawal;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting PortugalEx demo");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PortugalEx")
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PortugalEx",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    )
}
