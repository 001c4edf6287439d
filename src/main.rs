//! Fleetcert server binary.

use tracing_subscriber::EnvFilter;

use fleetcert::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let routes = router::routes().with_state(AppState { db });

    let address = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", address, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server on {}", address);

    if let Err(e) = axum::serve(listener, routes).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
