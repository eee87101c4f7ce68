//! In-memory implementation of ShipStore for testing and development

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::core::filter::Predicate;
use crate::core::order::OrderSpec;
use crate::core::query::{Page, PageRequest};
use crate::core::ship::{Ship, ShipId};
use crate::core::store::{ShipPatch, ShipStore};

#[derive(Default)]
struct Catalog {
    ships: BTreeMap<ShipId, Ship>,
    /// Highest id ever handed out; ids are not reused after deletion
    last_id: u64,
}

/// In-memory ship store
///
/// Ships are kept in id order, which is also the tie-break order when sorting.
/// Clones share the same catalog.
#[derive(Clone, Default)]
pub struct InMemoryShipStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryShipStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        let catalog = self
            .catalog
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(catalog.ships.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn matching(&self, predicate: &Predicate) -> Result<Vec<Ship>> {
        let catalog = self
            .catalog
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(catalog
            .ships
            .values()
            .filter(|ship| predicate.matches(ship))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ShipStore for InMemoryShipStore {
    async fn exists(&self, id: ShipId) -> Result<bool> {
        let catalog = self
            .catalog
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(catalog.ships.contains_key(&id))
    }

    async fn find_by_id(&self, id: ShipId) -> Result<Option<Ship>> {
        let catalog = self
            .catalog
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(catalog.ships.get(&id).cloned())
    }

    async fn find_page(
        &self,
        predicate: &Predicate,
        order: OrderSpec,
        page: PageRequest,
    ) -> Result<Page<Ship>> {
        let mut ships = self.matching(predicate)?;
        ships.sort_by(|a, b| order.compare(a, b));

        let total = ships.len();
        let content = ships
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();

        Ok(Page::new(content, page, total))
    }

    async fn find_all(&self, predicate: &Predicate) -> Result<Vec<Ship>> {
        self.matching(predicate)
    }

    async fn save(&self, mut ship: Ship) -> Result<Ship> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = match ship.id {
            Some(id) => {
                if !catalog.ships.contains_key(&id) {
                    bail!("Ship {} does not exist", id);
                }
                id
            }
            None => {
                let next = catalog.last_id + 1;
                let id = ShipId::new(next).ok_or_else(|| anyhow!("Ship id sequence exhausted"))?;
                catalog.last_id = next;
                ship.id = Some(id);
                id
            }
        };

        catalog.ships.insert(id, ship.clone());

        Ok(ship)
    }

    async fn update(&self, id: ShipId, patch: ShipPatch) -> Result<Option<Ship>> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(catalog.ships.get_mut(&id).map(|ship| {
            patch(ship);
            ship.clone()
        }))
    }

    async fn delete_by_id(&self, id: ShipId) -> Result<bool> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(catalog.ships.remove(&id).is_some())
    }
}
