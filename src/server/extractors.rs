//! Axum extractors that reject with [`ShipError`]
//!
//! Malformed bodies and query strings come back in the same error shape as
//! every other bad request instead of axum's plain-text rejections.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::core::{ShipError, ShipPayload};

/// JSON ship payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_ship(
///     State(service): State<ShipQueryService>,
///     ShipJson(payload): ShipJson,
/// ) -> Result<Json<Ship>, ShipError> {
///     service.create(payload).await.map(Json)
/// }
/// ```
#[derive(Debug)]
pub struct ShipJson(pub ShipPayload);

impl<S> FromRequest<S> for ShipJson
where
    S: Send + Sync,
{
    type Rejection = ShipError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<ShipPayload>::from_request(req, state)
            .await
            .map_err(|e| ShipError::InvalidPayload(e.body_text()))?;

        Ok(Self(payload))
    }
}

/// Query string decoded into `T`
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ShipError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ShipError::InvalidQuery(e.body_text()))?;

        Ok(Self(value))
    }
}
