use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod config;
pub mod db;
pub mod graphql;
pub mod repository;

use crate::config::Config;
use crate::repository::MongoJobListingRepository;

/// Upper bound on closing the MongoDB client at shutdown
const DISCONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobql_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        tracing::error!("Fatal: {:#}", err);
        return Err(err);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing::info!("Starting jobql server...");

    let config = Config::from_env()?;

    let mongo = config.mongo.connect().await?;

    let repository = Arc::new(MongoJobListingRepository::new(
        &mongo.database,
        &config.collection,
    ));
    let schema = graphql::build_schema(repository, &config.graphql);

    // Build router with all API endpoints
    let app = api::create_router(schema, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!(
        "Connect to http://{}/ for GraphQL playground",
        listener.local_addr()?
    );

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Close the store even when serving failed
    if let Err(err) = db::disconnect(mongo.client, DISCONNECT_TIMEOUT).await {
        tracing::warn!("Failed to disconnect from MongoDB: {}", err);
    }

    served?;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down"),
    }
}
