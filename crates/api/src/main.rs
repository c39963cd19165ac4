use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use catalog_db::models::item::Item;
use catalog_db::models::product::Product;
use catalog_db::repositories::{ItemRepo, MemoryRepository, ProductRepo, Repository};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::ServerConfig;
use catalog_api::grpc;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        grpc_port = config.grpc_port,
        "Loaded server configuration"
    );

    // --- Storage ---
    let (products, items) = open_repositories(&config).await;

    // --- App state ---
    let state = AppState::new(Arc::clone(&products), items);
    let app = build_app_router(state, &config);

    // --- Shutdown coordination ---
    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            shutdown_signal().await;
            shutdown.cancel();
        }
    });

    let host: IpAddr = config.host.parse().expect("Invalid HOST address");

    // --- gRPC server ---
    let grpc_addr = SocketAddr::new(host, config.grpc_port);
    let grpc_handle = tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            let stop = shutdown.clone().cancelled_owned();
            if let Err(err) = grpc::serve(grpc_addr, products, stop).await {
                tracing::error!(error = %err, "gRPC server failed");
                shutdown.cancel();
            }
        }
    });

    // --- HTTP server (REST + GraphQL) ---
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("HTTP server stopped accepting connections, waiting for gRPC server");
    shutdown.cancel();
    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(drain, grpc_handle).await.is_err() {
        tracing::warn!("gRPC server did not stop within the shutdown timeout");
    }

    tracing::info!("Graceful shutdown complete");
}

/// Connect, check and migrate PostgreSQL when `DATABASE_URL` is set;
/// otherwise fall back to the in-memory store.
async fn open_repositories(
    config: &ServerConfig,
) -> (Arc<dyn Repository<Product>>, Arc<dyn Repository<Item>>) {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, using the in-memory store; data will not persist");
        return (
            Arc::new(MemoryRepository::<Product>::new()),
            Arc::new(MemoryRepository::<Item>::new()),
        );
    };

    let pool = catalog_db::create_pool(database_url, config.database_max_connections)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    catalog_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    catalog_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    (
        Arc::new(ProductRepo::new(pool.clone())),
        Arc::new(ItemRepo::new(pool)),
    )
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the servers shut
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
