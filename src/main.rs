use std::net::SocketAddr;

use tracing::info;

mod app;
mod config;
mod constants;
mod error;
mod gui_config;
mod handlers;
mod options;
mod settings;
mod shutdown;
mod state;
mod util;

use crate::config::AppConfig;
use crate::settings::{get_bool, get_str};
use crate::state::AppState;

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Local runs can keep settings in a `.env` file.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env();
    let state = AppState::new(config.settings, config.trust_proxy_headers);
    info!(
        base_url = get_str(&state.settings, "base_url").unwrap_or_default(),
        sandbox = get_bool(&state.settings, "sandbox"),
        insecure = get_bool(&state.settings, "insecure"),
        trust_proxy_headers = state.trust_proxy_headers,
        "settings normalized"
    );

    let app = app::build_router(state);

    info!(bind = %config.bind, "starting server");
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .expect("bind must succeed");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .expect("server must start");
    info!("server stopped");
}
