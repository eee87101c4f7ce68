//! Ship registry server
//!
//! Loads a YAML configuration (first argument, default
//! `demos/ship_server/config.yaml`), seeds an in-memory store and serves
//! the REST API.
//!
//! ```text
//! cargo run --example ship_server -- demos/ship_server/config.yaml
//! curl 'http://127.0.0.1:8080/rest/ships?order=RATING&pageSize=5'
//! ```

use anyhow::Result;
use ship_registry::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "demos/ship_server/config.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = AppConfig::from_yaml_file(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let service = ShipQueryService::new(InMemoryShipStore::new());
    for payload in config.seed_ships.iter().cloned() {
        service.create(payload).await?;
    }
    tracing::info!(ships = config.seed_ships.len(), "catalog seeded from {}", path);

    serve(build_ship_routes(service), &config.bind_address()).await
}
