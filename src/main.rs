mod app;
mod bootstrap;
mod error;
mod events;
mod notify;
mod pipeline;
mod sink;
mod ui;
mod utils;

use adw::prelude::*;
use adw::Application;
use tracing_subscriber::EnvFilter;

fn main() -> glib::ExitCode {
    let loaded = crate::app::AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    if let Err(e) = &loaded {
        log::warn!("using default settings: {e}");
    }

    let app = Application::builder()
        .application_id("com.example.SyntheticEventsGtk")
        .build();
    app.connect_activate(move |app| {
        crate::app::build_ui(app, &config);
    });
    app.run()
}
