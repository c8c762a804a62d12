mod config;
mod error;
mod host;
mod launcher;
mod ui;

use std::env;

use config::LauncherConfig;
use ui::app::{LauncherApp, viewport};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional JSON config path as the first argument; defaults otherwise.
    let config = LauncherConfig::from_arg(env::args().nth(1).as_deref());

    let options = eframe::NativeOptions {
        viewport: viewport(&config),
        ..Default::default()
    };
    let title = config.app_name.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(LauncherApp::new(cc, config)))),
    )
}
