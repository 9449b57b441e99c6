include!("../../lib.rs");
use std::net::SocketAddr;
use crate::catalog::controller::catalog_routes;
use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();

    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
    let state = AppState::new(environment.as_str(), RepositoryStore::InMemory).await;

    let port = std::env::var("HTTP_PORT").ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("starting catalog service for {} on {}", state.config.environment, addr);
    let app = catalog_routes(state);

    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
