//! HTTP handlers for ship operations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::core::{ListParams, Ship, ShipError, ShipFilter, ShipQueryService};
use crate::server::extractors::{QueryParams, ShipJson};

/// `GET /rest/ships`: the requested page as a JSON array
pub async fn list_ships(
    State(service): State<ShipQueryService>,
    QueryParams(filter): QueryParams<ShipFilter>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<Json<Vec<Ship>>, ShipError> {
    let page = service
        .list(&filter, params.order_spec(), params.page_request()?)
        .await?;
    Ok(Json(page.content))
}

/// `GET /rest/ships/count`
pub async fn count_ships(
    State(service): State<ShipQueryService>,
    QueryParams(filter): QueryParams<ShipFilter>,
) -> Result<Json<usize>, ShipError> {
    service.count(&filter).await.map(Json)
}

pub async fn get_ship(
    State(service): State<ShipQueryService>,
    Path(id): Path<String>,
) -> Result<Json<Ship>, ShipError> {
    service.get(&id).await.map(Json)
}

pub async fn create_ship(
    State(service): State<ShipQueryService>,
    ShipJson(payload): ShipJson,
) -> Result<Json<Ship>, ShipError> {
    service.create(payload).await.map(Json)
}

/// `POST /rest/ships/{id}`: partial edit
pub async fn update_ship(
    State(service): State<ShipQueryService>,
    Path(id): Path<String>,
    ShipJson(payload): ShipJson,
) -> Result<Json<Ship>, ShipError> {
    service.update(&id, payload).await.map(Json)
}

pub async fn delete_ship(
    State(service): State<ShipQueryService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ShipError> {
    service.delete(&id).await?;
    Ok(StatusCode::OK)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
