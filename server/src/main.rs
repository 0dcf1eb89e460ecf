//! Tienda API server: loads settings, prepares the database, serves the resource routes.
//!
//! Run from repo root: `cargo run -p tienda-server`

use tienda_api::{app, ensure_database_exists, ensure_schema, resources, AppState, PgGateway, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tienda_api=info,tienda_server=info,tower_http=info")),
        )
        .init();

    if settings.auto_migrate {
        ensure_database_exists(&settings.database_url).await?;
    }
    let gateway = PgGateway::connect(&settings).await?;
    if settings.auto_migrate {
        ensure_schema(gateway.pool(), &resources::all()).await?;
    }

    let state = AppState::new(gateway.clone());
    let router = app(state, settings.body_limit_bytes);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    gateway.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
