//! Event RSVP collector.
//!
//! Guests submit their name and dinner/party attendance through a small JSON
//! API; the organizer reads every submission back through a password-gated
//! listing. One table and three routes.

use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};

use signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;

use routes::{admin_handler, root_handler, rsvp_handler};
use state::AppState;

/// The one origin allowed to call the API from a browser.
pub const ALLOWED_ORIGIN: &str = "https://cumplepelusa.vercel.app";

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");

    // CORS forbids wildcard methods and headers when credentials are allowed.
    let cors = CorsLayer::new()
        .allow_origin(
            ALLOWED_ORIGIN
                .parse::<HeaderValue>()
                .expect("Origin misconfigured!"),
        )
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/rsvp", post(rsvp_handler))
        .route("/admin", get(admin_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
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
