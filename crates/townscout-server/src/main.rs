mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(townscout_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let geocoder = townscout_osm::GeocoderClient::new(
        &config.nominatim_base_url,
        config.http_timeout_secs,
        &config.user_agent,
    )?;
    let overpass = townscout_osm::OverpassClient::new(
        &config.overpass_base_url,
        config.http_timeout_secs,
        &config.user_agent,
        config.overpass_fetch_cap,
    )?;

    let state = AppState {
        config: Arc::clone(&config),
        geocoder: Arc::new(geocoder),
        overpass: Arc::new(overpass),
    };
    let app = build_app(state);

    tracing::info!(addr = %config.bind_addr, "starting townscout server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
