mod api;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState, Catalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = venuemap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Ingestion runs exactly once, before the API comes up. A failed run is
    // fatal for the process; restarting is the retry.
    let client = venuemap_ingest::SourceClient::new(config.fetch_timeout_secs, &config.user_agent)?;
    let locations = venuemap_ingest::load_locations(&client, &config.source_url).await?;
    let catalog = Catalog::new(locations, config.source_url.clone());
    tracing::info!(count = catalog.locations.len(), "location collection ready");

    let app = build_app(AppState {
        catalog: Arc::new(catalog),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "serving venue map API");
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
