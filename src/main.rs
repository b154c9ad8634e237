//! Sessionboard application entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Ensure the data directory and collection files exist
//! 3. Seed the default owner account on first run
//! 4. Build router with API routes + static file serving
//! 5. Start Axum server

use sessionboard::storage::user::{DEFAULT_OWNER_PASSWORD, DEFAULT_OWNER_USERNAME};
use sessionboard::{auth::middleware::AppState, config::Config, routes, storage};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() {
    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config from environment
    let config = Config::from_env().expect("Failed to load config");
    tracing::info!("Starting sessionboard on {}", config.bind_addr);

    if config.uses_default_secret() {
        tracing::warn!(
            "JWT_SECRET is not set; using the default signing secret. \
             Set JWT_SECRET before exposing this server."
        );
    }

    // Ensure data directory and collection files exist
    let store = storage::FileStore::new(&config.data_dir);
    store.init().await.expect("Failed to initialize data files");

    // Seed the default owner on first run
    let seeded = storage::user::seed_default_owner(&store)
        .await
        .expect("Failed to seed default owner");
    if seeded {
        tracing::warn!(
            "Default owner created: username: {}, password: {} — change this in any real deployment",
            DEFAULT_OWNER_USERNAME,
            DEFAULT_OWNER_PASSWORD
        );
    }

    // Build shared state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build router:
    // - API routes (with state)
    // - Static file serving for the frontend (fallback)
    // The API is consumed cross-origin by the dev frontend, so CORS is
    // wide open like the original deployment.
    let app = routes::api_router()
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Bind to configured address
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("API available at http://{}/api", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
