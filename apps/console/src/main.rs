#![allow(non_snake_case)]

mod config;
mod error;
mod fixtures;
mod hooks;
mod models;
mod routes;
mod state;
mod ui;

use config::{AppConfig, ConfigError, LogLevel};
use dioxus::prelude::*;
use dioxus_router::prelude::Router;
use once_cell::sync::OnceCell;
use routes::Route;
use state::AppState;
use tracing::{info, warn};

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    let (config, rejected) = AppConfig::from_env();
    init_logging(config.log_level);
    bootstrap(config, &rejected);
    launch(App);
}

fn init_logging(level: LogLevel) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(level.as_tracing());
    });
}

fn bootstrap(config: AppConfig, rejected: &[ConfigError]) {
    for err in rejected {
        warn!(%err, "config value ignored, using default");
    }
    info!(
        profile = ?config.profile,
        breakpoint = config.mobile_breakpoint_px,
        widget_base = %config.widget_base_url,
        "ChatBot Hub console starting"
    );
    let _ = APP_CONFIG.set(config);
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        Router::<Route> {}
    }
}
