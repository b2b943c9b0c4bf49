//! Pocket Transfers API Server
//!
//! Moves funds between accounts and from accounts into their pockets.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::{ConnectOptions, Database};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresStore;
use app::{AccountService, TransferService};
use config::Config;
use domain::ports::TransactionalStore;

/// Application state shared across all handlers
pub struct AppState<S>
where
    S: TransactionalStore,
{
    pub transfer_service: Arc<TransferService<S>>,
    pub account_service: Arc<AccountService<S>>,
}

impl<S> AppState<S>
where
    S: TransactionalStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            transfer_service: Arc::new(TransferService::new(store.clone())),
            account_service: Arc::new(AccountService::new(store)),
        }
    }
}

impl<S> Clone for AppState<S>
where
    S: TransactionalStore,
{
    fn clone(&self) -> Self {
        Self {
            transfer_service: self.transfer_service.clone(),
            account_service: self.account_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over any storage backend
pub fn router<S: TransactionalStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/accounts/:id", get(handlers::get_account::<S>))
        .route("/pockets/:id", get(handlers::get_pocket::<S>))
        .route(
            "/accounts/:id/pocket-transfers",
            post(handlers::transfer_to_pocket::<S>),
        )
        .route(
            "/accounts/:id/transfers",
            post(handlers::transfer_to_account::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pocket_transfers_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pocket Transfers API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.max_connections(config.database_max_connections);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let store = Arc::new(PostgresStore::new(db));
    let app = router(AppState::new(store));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
