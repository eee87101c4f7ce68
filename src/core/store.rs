//! Persistence collaborator for ship records

use anyhow::Result;
use async_trait::async_trait;

use crate::core::filter::Predicate;
use crate::core::order::OrderSpec;
use crate::core::query::{Page, PageRequest};
use crate::core::ship::{Ship, ShipId};

/// In-place edit applied by [`ShipStore::update`]
pub type ShipPatch = Box<dyn FnOnce(&mut Ship) + Send>;

/// Storage backend for ships
///
/// Implementations own durability and isolation. `update` and `delete_by_id`
/// must each act on one consistent snapshot of the addressed ship; the
/// service layer adds no locking of its own.
#[async_trait]
pub trait ShipStore: Send + Sync {
    async fn exists(&self, id: ShipId) -> Result<bool>;

    async fn find_by_id(&self, id: ShipId) -> Result<Option<Ship>>;

    /// Matching ships sorted by `order`, cut to the `page` window
    async fn find_page(
        &self,
        predicate: &Predicate,
        order: OrderSpec,
        page: PageRequest,
    ) -> Result<Page<Ship>>;

    /// Every matching ship, unsorted and unpaged
    async fn find_all(&self, predicate: &Predicate) -> Result<Vec<Ship>>;

    /// Insert when `ship.id` is `None` (assigning a fresh id), update otherwise
    async fn save(&self, ship: Ship) -> Result<Ship>;

    /// Apply `patch` to the stored ship and persist it in one step
    ///
    /// Returns `None` when no ship is stored under `id`.
    async fn update(&self, id: ShipId, patch: ShipPatch) -> Result<Option<Ship>>;

    /// Returns `false` when there was nothing to delete
    async fn delete_by_id(&self, id: ShipId) -> Result<bool>;
}
