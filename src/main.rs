use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use catalog_rs::{
    create_app, init_observability, models::Catalog, shutdown_observability, AppState, Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Subscriber is not installed yet, so config problems surface through the returned error
    let config = Config::from_environment()?;

    init_observability(&config.observability)?;

    info!(
        "Starting {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let catalog = Arc::new(Catalog::seed());
    for (collection, id) in catalog.duplicate_ids() {
        warn!(collection, id = %id, "Duplicate identifier in seed data; filters will return every match");
    }
    info!(
        foods = catalog.foods().len(),
        drinks = catalog.drinks().len(),
        "Catalog loaded"
    );

    let app = create_app(AppState::new(catalog)?);

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_observability().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for CTRL+C: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
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
