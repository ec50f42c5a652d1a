//! Site Planner main entry point

use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "siteplan_frontend=debug,siteplan_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Site Planner");

    // Optional plan file to resume
    let resume = std::env::args_os().nth(1).map(PathBuf::from);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Site Planner"),
        ..Default::default()
    };

    eframe::run_native(
        "site-planner",
        native_options,
        Box::new(move |cc| Ok(Box::new(siteplan_frontend::SitePlannerApp::with_plan(cc, resume)))),
    )
}
