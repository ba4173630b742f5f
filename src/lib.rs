//! Documentation of a flat-file dish catalog service.
//!
//!
//!
//! # General Infrastructure
//! - Single process, single JSON file as the database
//! - Every request re-reads the whole file and mutations rewrite it in full
//! - No state survives between requests, the file is the source of truth
//! - No reverse proxy assumptions, the service binds directly
//!
//!
//!
//! # Notes
//!
//! ## Why a flat file
//! The dataset is a single small collection, so a database would be
//! excessive. Reading and rewriting the whole file per request keeps the
//! storage layer trivial and restart-safe at the cost of concurrent-write
//! safety (see `storage`).
//!
//! ## Route ordering
//! `/dishes/get` (search) overlaps in shape with `/dishes/{id}`. The
//! literal path is registered first so it is never shadowed by the
//! parametric one.
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Run the server (listens on port 3000, reads/writes `db.json`).
//! ```sh
//! RUST_LOG=info cargo run
//! ```
use std::time::Duration;

use axum::http::{Method, header::CONTENT_TYPE};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod storage;

use routes::app;
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let router = app(state.clone()).layer(cors);

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
