//! Ship query and mutation service
//!
//! [`ShipQueryService`] ties the validator, the rating calculator, the
//! predicate builder and the sort keys to a [`ShipStore`]. Every operation
//! either returns its value or a [`ShipError`]; failures leave the store
//! untouched.

use std::sync::Arc;

use crate::core::error::ShipError;
use crate::core::filter::ShipFilter;
use crate::core::order::OrderSpec;
use crate::core::query::{Page, PageRequest};
use crate::core::ship::{Ship, ShipId, ShipPayload};
use crate::core::store::{ShipPatch, ShipStore};
use crate::core::validation::{self, ValidationMode};

/// Service over a ship store
///
/// The store is passed in at construction; clones share it.
#[derive(Clone)]
pub struct ShipQueryService {
    store: Arc<dyn ShipStore>,
}

impl ShipQueryService {
    pub fn new(store: impl ShipStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// One page of ships matching `filter`, sorted by `order`
    pub async fn list(
        &self,
        filter: &ShipFilter,
        order: OrderSpec,
        page: PageRequest,
    ) -> Result<Page<Ship>, ShipError> {
        let predicate = filter.to_predicate()?;
        tracing::debug!(
            conditions = predicate.conditions().len(),
            order = order.order.field_name(),
            page_number = page.page_number,
            page_size = page.page_size,
            "listing ships"
        );

        Ok(self.store.find_page(&predicate, order, page).await?)
    }

    /// Number of ships matching `filter`, across all pages
    pub async fn count(&self, filter: &ShipFilter) -> Result<usize, ShipError> {
        let predicate = filter.to_predicate()?;
        let ships = self.store.find_all(&predicate).await?;
        tracing::debug!(
            conditions = predicate.conditions().len(),
            count = ships.len(),
            "counted ships"
        );

        Ok(ships.len())
    }

    pub async fn get(&self, raw_id: &str) -> Result<Ship, ShipError> {
        let id: ShipId = raw_id.parse()?;
        self.load(id).await
    }

    /// Validate a full payload, compute the rating and store a new ship
    pub async fn create(&self, payload: ShipPayload) -> Result<Ship, ShipError> {
        if let Err(e) = validation::validate(&payload, ValidationMode::Create) {
            tracing::warn!(field = e.field(), "rejected ship creation: {}", e);
            return Err(e.into());
        }

        let ship = payload.into_ship()?;
        let saved = self.store.save(ship).await?;
        tracing::info!(id = ?saved.id, name = %saved.name, rating = saved.rating, "ship created");

        Ok(saved)
    }

    /// Overwrite the fields present in `payload` and recompute the rating
    pub async fn update(&self, raw_id: &str, payload: ShipPayload) -> Result<Ship, ShipError> {
        let id: ShipId = raw_id.parse()?;

        if let Err(e) = validation::validate(&payload, ValidationMode::Edit) {
            tracing::warn!(%id, field = e.field(), "rejected ship update: {}", e);
            return Err(e.into());
        }

        let patch: ShipPatch = Box::new(move |ship: &mut Ship| ship.apply(payload));
        let updated = self
            .store
            .update(id, patch)
            .await?
            .ok_or(ShipError::NotFound { id })?;
        tracing::info!(%id, rating = updated.rating, "ship updated");

        Ok(updated)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), ShipError> {
        let id: ShipId = raw_id.parse()?;

        if !self.store.delete_by_id(id).await? {
            return Err(ShipError::NotFound { id });
        }
        tracing::info!(%id, "ship deleted");

        Ok(())
    }

    async fn load(&self, id: ShipId) -> Result<Ship, ShipError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ShipError::NotFound { id })
    }
}
