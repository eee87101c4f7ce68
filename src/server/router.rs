//! Route table for the ship API

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::core::ShipQueryService;
use crate::server::handlers::{
    count_ships, create_ship, delete_ship, get_ship, health, list_ships, update_ship,
};

/// Build the ship routes
///
/// - GET    /rest/ships         - List one page of ships
/// - POST   /rest/ships         - Create a ship
/// - GET    /rest/ships/count   - Count matching ships
/// - GET    /rest/ships/{id}    - Get a ship
/// - POST   /rest/ships/{id}    - Edit a ship
/// - DELETE /rest/ships/{id}    - Delete a ship
/// - GET    /health             - Liveness probe
pub fn build_ship_routes(service: ShipQueryService) -> Router {
    Router::new()
        .route("/rest/ships", get(list_ships).post(create_ship))
        .route("/rest/ships/count", get(count_ships))
        .route(
            "/rest/ships/{id}",
            get(get_ship).post(update_ship).delete(delete_ship),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
