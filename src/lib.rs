//! # Ship Registry
//!
//! A catalog of ship records with multi-criteria filtering, sorting, paging
//! and a derived rating.
//!
//! ## Features
//!
//! - **Typed filters**: every optional filter compiles to a predicate fragment,
//!   and the fragments are combined with AND
//! - **Exclusive ranges**: `min*`/`max*`/`after`/`before` bounds exclude equal values
//! - **Derived rating**: recomputed on every create and edit, never client supplied
//! - **Pluggable storage**: the service talks to any [`ShipStore`](core::ShipStore)
//! - **REST exposure**: axum routes under `/rest/ships`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ship_registry::prelude::*;
//!
//! let service = ShipQueryService::new(InMemoryShipStore::new());
//!
//! let ship = service.create(ShipPayload {
//!     name: Some("Eagle".into()),
//!     planet: Some("Mars".into()),
//!     ship_type: Some(ShipType::Military),
//!     prod_date: Some(Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap()),
//!     speed: Some(0.5),
//!     crew_size: Some(100),
//!     ..Default::default()
//! }).await?;
//! assert_eq!(ship.rating, 2.0);
//!
//! let fast = ShipFilter { min_speed: Some(0.4), ..Default::default() };
//! let order = OrderSpec::desc(ShipOrder::Rating);
//! let page = service.list(&fast, order, PageRequest::default()).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Condition, ErrorKind, ListParams, OrderSpec, Page, PageRequest, Predicate,
        PredicateBuilder, Ship, ShipError, ShipFilter, ShipId, ShipOrder, ShipPatch, ShipPayload,
        ShipQueryService, ShipStore, ShipType, SortDirection, ValidationError, ValidationMode,
    };

    // === Storage ===
    pub use crate::storage::InMemoryShipStore;

    // === Config ===
    pub use crate::config::{AppConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{build_ship_routes, serve};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, TimeZone, Utc};
}
