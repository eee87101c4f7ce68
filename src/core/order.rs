//! Sort keys for ship listings

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::ship::Ship;

/// Sortable ship field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    Date,
    Rating,
}

impl ShipOrder {
    /// Name of the field the store sorts on
    pub fn field_name(self) -> &'static str {
        match self {
            ShipOrder::Id => "id",
            ShipOrder::Speed => "speed",
            ShipOrder::Date => "prodDate",
            ShipOrder::Rating => "rating",
        }
    }

    pub fn compare(self, a: &Ship, b: &Ship) -> Ordering {
        match self {
            ShipOrder::Id => a.id.cmp(&b.id),
            ShipOrder::Speed => a.speed.total_cmp(&b.speed),
            ShipOrder::Date => a.prod_date.cmp(&b.prod_date),
            ShipOrder::Rating => a.rating.total_cmp(&b.rating),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "ASC")]
    Asc,
    #[serde(alias = "DESC")]
    Desc,
}

/// One sort key and its direction; defaults to id ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderSpec {
    pub order: ShipOrder,
    pub direction: SortDirection,
}

impl OrderSpec {
    pub fn new(order: ShipOrder, direction: SortDirection) -> Self {
        Self { order, direction }
    }

    pub fn asc(order: ShipOrder) -> Self {
        Self::new(order, SortDirection::Asc)
    }

    pub fn desc(order: ShipOrder) -> Self {
        Self::new(order, SortDirection::Desc)
    }

    /// Equal keys compare as `Equal` in both directions, so a stable sort
    /// keeps the store's native order for ties
    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        let ordering = self.order.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}
