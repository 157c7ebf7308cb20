pub mod app;
pub mod handlers;

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

use crate::database::get_database_url;
use crate::services::WilderService;
use crate::store::open_store;

pub async fn start_server(port: u16, database: &str, cors_origin: Option<&str>) -> Result<()> {
    let database_url = get_database_url(Some(database));
    let store = match open_store(&database_url).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to connect to document store: {}", e);
            return Err(e.into());
        }
    };
    let wilder_service = Arc::new(WilderService::new(store));

    let app = app::create_app(wilder_service.clone(), cors_origin)?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    wilder_service.close().await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");

    #[cfg(feature = "graphql")]
    {
        info!("  /graphql                    - GraphQL API & Playground");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
